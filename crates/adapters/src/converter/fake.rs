// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake converter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ConversionRequest, ConversionResult, ConvertError, RecipeConverter, ResultMode};
use async_trait::async_trait;
use rk_recipe::{Mode, RecipeMetadata, ShortVersion, RECIPE_METADATA_FILE};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Fake converter for testing.
///
/// Reads the real metadata of the source folder, and on success writes only
/// the metadata file into the converted folder.
#[derive(Clone, Default)]
pub struct FakeConverter {
    calls: Arc<Mutex<Vec<ConversionRequest>>>,
    results: Arc<Mutex<HashMap<ShortVersion, ResultMode>>>,
    destination_folder: Arc<Mutex<Option<String>>>,
}

impl FakeConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ConversionRequest> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Force the result for conversions pinned to `version`
    pub fn set_result(&self, version: ShortVersion, result: ResultMode) {
        self.results
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(version, result);
    }

    /// Report `name` as the converted folder regardless of metadata
    pub fn set_destination_folder(&self, name: &str) {
        *self
            .destination_folder
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = Some(name.to_string());
    }

    fn scripted_result(&self, request: &ConversionRequest) -> Option<ResultMode> {
        let version = request.agp_version.as_ref()?.short();
        self.results
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&version)
            .copied()
    }
}

#[async_trait]
impl RecipeConverter for FakeConverter {
    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());

        let mut metadata = RecipeMetadata::load_from(&request.source, request.mode)?;
        if let Some(name) = self
            .destination_folder
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            metadata.destination_folder = name;
        }

        let result_mode = match (self.scripted_result(request), &request.agp_version) {
            (Some(result), _) => result,
            (None, Some(agp_version))
                if request.mode == Mode::Release
                    && !metadata.version_range.is_compliant(agp_version) =>
            {
                if request.strict_version_check {
                    return Err(ConvertError::IncompatibleVersion {
                        recipe: metadata.index_name,
                        agp_version: agp_version.clone(),
                        range: metadata.version_range,
                    });
                }
                ResultMode::Skip
            }
            _ => ResultMode::Success,
        };

        if result_mode == ResultMode::Success {
            let target = request.destination.join(&metadata.destination_folder);
            let io_error = |source| ConvertError::Io {
                path: target.clone(),
                source,
            };
            std::fs::create_dir_all(&target).map_err(io_error)?;
            std::fs::copy(
                request.source.join(RECIPE_METADATA_FILE),
                target.join(RECIPE_METADATA_FILE),
            )
            .map_err(io_error)?;
        }

        Ok(ConversionResult {
            result_mode,
            metadata,
        })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
