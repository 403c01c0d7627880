// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod list;
pub mod source;
pub mod working_copy;

use crate::output::{ReportView, Summary};
use anyhow::{Context as _, Result};
use rk_recipe::find_recipe_folders;
use rk_validate::{ValidateError, ValidationReport};
use std::future::Future;
use std::path::{Path, PathBuf};

/// Recipe folders at `path`, which is a recipe or a folder of recipes
fn recipe_folders(path: &Path) -> Result<Vec<PathBuf>> {
    let folders = find_recipe_folders(path)
        .with_context(|| format!("unable to read {}", path.display()))?;
    if folders.is_empty() {
        anyhow::bail!("no recipe found in {}", path.display());
    }
    Ok(folders)
}

/// Validate every recipe at `path` in order and print the results.
///
/// A recipe that cannot be validated is reported and the rest still run.
async fn validate_all<F, Fut>(path: &Path, mut validate: F) -> Result<bool>
where
    F: FnMut(PathBuf) -> Fut,
    Fut: Future<Output = Result<ValidationReport, ValidateError>>,
{
    let mut summary = Summary::default();
    for folder in recipe_folders(path)? {
        match validate(folder.clone()).await {
            Ok(report) => {
                print!("{}", ReportView(&report));
                summary.record(&report);
            }
            Err(e) => {
                eprintln!("error: {}: {}", folder.display(), e);
                summary.errors += 1;
            }
        }
    }

    println!("{}", summary);
    Ok(summary.passed())
}
