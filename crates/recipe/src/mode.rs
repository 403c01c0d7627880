// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recipe representation modes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which representation of a recipe is being read or produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Parameterized, version-agnostic source of truth
    Source,
    /// Materialized copy pinned to one AGP version
    Release,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Source => write!(f, "source"),
            Mode::Release => write!(f, "release"),
        }
    }
}
