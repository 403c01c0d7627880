// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-version validation outcomes

use rk_adapters::ResultMode;
use rk_recipe::FullVersion;

/// Outcome of validating one recipe against one AGP version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionOutcome {
    pub agp_version: FullVersion,
    pub gradle_version: Option<String>,
    pub result_mode: ResultMode,
    /// Why the pass did not succeed, when known
    pub error: Option<String>,
}

impl VersionOutcome {
    pub fn new(agp_version: FullVersion, gradle_version: Option<String>) -> Self {
        Self {
            agp_version,
            gradle_version,
            result_mode: ResultMode::Success,
            error: None,
        }
    }

    pub(crate) fn fail(&mut self, error: impl ToString) {
        self.result_mode = ResultMode::Failure;
        self.error = Some(error.to_string());
    }
}

/// All version outcomes of a recipe validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Display name of the recipe
    pub recipe: String,
    pub outcomes: Vec<VersionOutcome>,
}

impl ValidationReport {
    pub fn new(recipe: &str) -> Self {
        Self {
            recipe: recipe.to_string(),
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: VersionOutcome) {
        self.outcomes.push(outcome);
    }

    /// Combined result: any failure fails the recipe, then any skip
    pub fn overall(&self) -> ResultMode {
        self.outcomes
            .iter()
            .fold(ResultMode::Success, |acc, o| acc.combine(o.result_mode))
    }

    pub fn is_success(&self) -> bool {
        self.overall().is_success()
    }

    pub fn failures(&self) -> impl Iterator<Item = &VersionOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.result_mode == ResultMode::Failure)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
