// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation of source-mode recipes

use crate::{Context, ValidateError, ValidationReport, VersionOutcome};
use rk_adapters::{ConversionRequest, ConvertError, RecipeConverter, ResultMode, TaskExecutor};
use rk_recipe::{folder_name, FullVersion, Mode, RecipeMetadata};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tracing::{error, info, warn};

/// Validates a recipe from source mode.
///
/// With a pinned AGP version only that version is validated. Otherwise the
/// recipe is validated against its min AGP version and its max (declared, or
/// the latest published one). Each version gets its own release copy in a
/// temporary directory, where the recipe's tasks are run.
#[derive(Clone)]
pub struct SourceValidator<C, T> {
    context: Arc<Context>,
    converter: C,
    executor: T,
    agp_version: Option<FullVersion>,
}

impl<C: RecipeConverter, T: TaskExecutor> SourceValidator<C, T> {
    pub fn new(context: Arc<Context>, converter: C, executor: T) -> Self {
        Self {
            context,
            converter,
            executor,
            agp_version: None,
        }
    }

    /// Validate against this version only
    pub fn with_agp_version(mut self, agp_version: FullVersion) -> Self {
        self.agp_version = Some(agp_version);
        self
    }

    /// Validate the source recipe in `recipe_folder`.
    ///
    /// `name` is used for reporting and defaults to the folder's name.
    pub async fn validate(
        &self,
        recipe_folder: &Path,
        name: Option<&str>,
    ) -> Result<ValidationReport, ValidateError> {
        let name = name.map_or_else(|| folder_name(recipe_folder), String::from);
        let metadata = RecipeMetadata::load_from(recipe_folder, Mode::Release)?;

        let mut report = ValidationReport::new(&name);
        for agp_version in self.target_versions(&metadata)? {
            let outcome = self
                .validate_version(&name, recipe_folder, agp_version)
                .await?;
            report.push(outcome);
        }

        info!(recipe = %name, result = %report.overall(), "validated");
        Ok(report)
    }

    fn target_versions(&self, metadata: &RecipeMetadata) -> Result<Vec<FullVersion>, ValidateError> {
        if let Some(agp_version) = &self.agp_version {
            return Ok(vec![agp_version.clone()]);
        }

        let range = metadata.version_range;
        let max = match range.max {
            Some(max) => match self.context.published_version(max) {
                Some(published) => published.clone(),
                None => {
                    warn!(version = %max, "no published release for declared max, using .0");
                    max.to_full()
                }
            },
            None => self
                .context
                .max_published_version()
                .cloned()
                .ok_or(ValidateError::NoPublishedVersion)?,
        };

        Ok(vec![range.min.to_full(), max])
    }

    async fn validate_version(
        &self,
        name: &str,
        from: &Path,
        agp_version: FullVersion,
    ) -> Result<VersionOutcome, ValidateError> {
        // A pinned Gradle installation decides its own version
        let gradle_version = match self.context.gradle_path() {
            Some(_) => None,
            None => self
                .context
                .gradle_version(agp_version.short())
                .map(String::from),
        };
        let mut outcome = VersionOutcome::new(agp_version.clone(), gradle_version.clone());

        let destination = TempDir::new().map_err(ValidateError::TempDir)?;
        // Normally strict; CI validates against every AGP version on purpose
        // and only skips the incompatible ones.
        let request = ConversionRequest::release(
            from,
            destination.path(),
            agp_version.clone(),
            gradle_version.clone(),
            !self.context.ci(),
        );

        let conversion = match self.converter.convert(&request).await {
            Ok(conversion) => conversion,
            Err(ConvertError::Metadata(e)) => return Err(e.into()),
            Err(e) => {
                error!(recipe = name, agp = %agp_version, error = %e, "conversion failed");
                outcome.fail(e);
                return Ok(outcome);
            }
        };

        if conversion.result_mode != ResultMode::Success {
            info!(recipe = name, agp = %agp_version, result = %conversion.result_mode, "not validated");
            outcome.result_mode = conversion.result_mode;
            return Ok(outcome);
        }

        let recipe_folder = conversion.recipe_folder(destination.path());
        info!(
            "Validating: Recipe {} ({}) with AGP: {} and Gradle: {}",
            name,
            recipe_folder.display(),
            agp_version,
            gradle_version.as_deref().unwrap_or("pinned")
        );

        let metadata = &conversion.metadata;
        let mut task_lists = vec![&metadata.tasks];
        if let Some(validation_tasks) = &metadata.validation_tasks {
            task_lists.push(validation_tasks);
        }

        for tasks in task_lists {
            if let Err(e) = self.executor.execute_tasks(&recipe_folder, tasks).await {
                error!(recipe = name, agp = %agp_version, error = %e, "tasks failed");
                outcome.fail(e);
                break;
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
