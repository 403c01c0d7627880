// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::converter::{ConversionRequest, ConversionResult, ConvertError, RecipeConverter};
use crate::tasks::{TaskError, TaskExecutor};
use async_trait::async_trait;
use std::path::Path;
use tracing::Instrument;

/// Wrapper that adds tracing to any RecipeConverter
#[derive(Clone)]
pub struct TracedConverter<C> {
    inner: C,
}

impl<C> TracedConverter<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: RecipeConverter> RecipeConverter for TracedConverter<C> {
    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
        let span = tracing::info_span!(
            "converter.convert",
            source = %request.source.display(),
            mode = %request.mode,
        );

        async {
            tracing::info!(
                agp = ?request.agp_version.as_ref().map(|v| v.to_string()),
                gradle = ?request.gradle_version,
                strict = request.strict_version_check,
                "starting"
            );

            // Precondition: source must be a directory
            if !request.source.is_dir() {
                tracing::error!("source folder does not exist");
                return Err(ConvertError::Io {
                    path: request.source.clone(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "source folder does not exist",
                    ),
                });
            }

            let start = std::time::Instant::now();
            let result = self.inner.convert(request).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(conversion) => tracing::info!(
                    result = %conversion.result_mode,
                    destination_folder = %conversion.metadata.destination_folder,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "converted"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "conversion failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any TaskExecutor
#[derive(Clone)]
pub struct TracedTaskExecutor<T> {
    inner: T,
}

impl<T> TracedTaskExecutor<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: TaskExecutor> TaskExecutor for TracedTaskExecutor<T> {
    async fn execute_tasks(&self, recipe_folder: &Path, tasks: &[String]) -> Result<(), TaskError> {
        if tasks.is_empty() {
            tracing::trace!(folder = %recipe_folder.display(), "no tasks");
            return Ok(());
        }

        let span = tracing::info_span!("tasks.execute", folder = %recipe_folder.display());

        async {
            tracing::info!(tasks = %tasks.join(" "), "running");

            let start = std::time::Instant::now();
            let result = self.inner.execute_tasks(recipe_folder, tasks).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "tasks done"),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "tasks failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
