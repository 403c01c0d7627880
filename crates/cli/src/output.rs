// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use rk_adapters::ResultMode;
use rk_validate::ValidationReport;
use std::fmt;

/// Per-version table of a recipe validation
pub struct ReportView<'a>(pub &'a ValidationReport);

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "{}: {}", report.recipe, report.overall())?;
        for outcome in &report.outcomes {
            let preview = if outcome.agp_version.is_preview() {
                " (preview)"
            } else {
                ""
            };
            writeln!(
                f,
                "  AGP {:<14} Gradle {:<10} {}{}",
                outcome.agp_version.to_string(),
                outcome.gradle_version.as_deref().unwrap_or("-"),
                outcome.result_mode,
                preview
            )?;
        }
        for failure in report.failures() {
            if let Some(error) = &failure.error {
                // Task output can span many lines; the first one names the failure
                writeln!(
                    f,
                    "  AGP {} failed: {}",
                    failure.agp_version,
                    error.lines().next().unwrap_or_default()
                )?;
            }
        }
        Ok(())
    }
}

/// Totals across all validated recipes
#[derive(Debug, Default)]
pub struct Summary {
    pub passed: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Recipes that could not be validated at all
    pub errors: usize,
}

impl Summary {
    pub fn record(&mut self, report: &ValidationReport) {
        match report.overall() {
            ResultMode::Success => self.passed += 1,
            ResultMode::Skip => self.skipped += 1,
            ResultMode::Failure => self.failed += 1,
        }
    }

    /// Whether the run should exit successfully
    pub fn passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} skipped, {} failed",
            self.passed, self.skipped, self.failed
        )?;
        if self.errors > 0 {
            write!(f, ", {} errors", self.errors)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
