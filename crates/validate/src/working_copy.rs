// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation of release-mode working copies

use crate::{Context, SourceValidator, ValidateError, ValidationReport};
use rk_adapters::{ConversionRequest, ConvertError, RecipeConverter, TaskExecutor};
use rk_recipe::folder_name;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tracing::debug;

/// Takes a working copy and validates that it still works.
///
/// The copy is converted back to source mode in a temporary directory, which
/// is then validated against the declared AGP range like any source recipe.
#[derive(Clone)]
pub struct WorkingCopyValidator<C, T> {
    converter: C,
    source_validator: SourceValidator<C, T>,
}

impl<C: RecipeConverter, T: TaskExecutor> WorkingCopyValidator<C, T> {
    pub fn new(context: Arc<Context>, converter: C, executor: T) -> Self {
        Self {
            source_validator: SourceValidator::new(context, converter.clone(), executor),
            converter,
        }
    }

    pub async fn validate(&self, recipe_folder: &Path) -> Result<ValidationReport, ValidateError> {
        let destination = TempDir::new().map_err(ValidateError::TempDir)?;
        let request = ConversionRequest::source(recipe_folder, destination.path());

        let conversion = match self.converter.convert(&request).await {
            Ok(conversion) => conversion,
            Err(ConvertError::Metadata(e)) => return Err(e.into()),
            Err(e) => {
                return Err(ValidateError::RoundTrip {
                    folder: recipe_folder.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        };

        if !conversion.result_mode.is_success() {
            return Err(ValidateError::RoundTrip {
                folder: recipe_folder.to_path_buf(),
                reason: format!("conversion result was {}", conversion.result_mode),
            });
        }

        // The source copy lives in the folder its metadata names
        let source_root = conversion.recipe_folder(destination.path());
        debug!(
            working_copy = %recipe_folder.display(),
            source = %source_root.display(),
            "converted to source"
        );

        self.source_validator
            .validate(&source_root, Some(&folder_name(recipe_folder)))
            .await
    }
}

#[cfg(test)]
#[path = "working_copy_tests.rs"]
mod tests;
