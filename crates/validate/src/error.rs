// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation errors
//!
//! These abort a whole validation. Per-version conversion and task failures
//! are reported through [`crate::ValidationReport`] instead.

use rk_recipe::MetadataError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error("no published AGP version is configured")]
    NoPublishedVersion,
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("converting {} back to source mode failed: {reason}", .folder.display())]
    RoundTrip { folder: PathBuf, reason: String },
}
