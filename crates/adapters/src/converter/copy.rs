// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Converter that materializes recipes by copying their tree
//!
//! Build scripts are copied verbatim; only folder naming and AGP
//! compatibility gating are applied.

use super::{ConversionRequest, ConversionResult, ConvertError, RecipeConverter, ResultMode};
use async_trait::async_trait;
use rk_recipe::{Mode, RecipeMetadata};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Local build state that never belongs in a converted copy
const EXCLUDED_NAMES: &[&str] = &["build", ".gradle", "local.properties"];

/// Copy-based recipe converter
#[derive(Clone, Copy, Debug, Default)]
pub struct CopyConverter;

impl CopyConverter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RecipeConverter for CopyConverter {
    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
        let metadata = RecipeMetadata::load_from(&request.source, request.mode)?;

        if let (Mode::Release, Some(agp_version)) = (request.mode, &request.agp_version) {
            if !metadata.version_range.is_compliant(agp_version) {
                if request.strict_version_check {
                    return Err(ConvertError::IncompatibleVersion {
                        recipe: metadata.index_name,
                        agp_version: agp_version.clone(),
                        range: metadata.version_range,
                    });
                }
                tracing::warn!(
                    recipe = %metadata.index_name,
                    agp = %agp_version,
                    range = %metadata.version_range,
                    "skipping incompatible AGP version"
                );
                return Ok(ConversionResult {
                    result_mode: ResultMode::Skip,
                    metadata,
                });
            }
        }

        let target = request.destination.join(&metadata.destination_folder);
        copy_tree(&request.source, &target)?;
        tracing::debug!(
            source = %request.source.display(),
            target = %target.display(),
            mode = %request.mode,
            "copied recipe"
        );

        Ok(ConversionResult {
            result_mode: ResultMode::Success,
            metadata,
        })
    }
}

fn is_excluded(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_NAMES.contains(&name))
}

fn copy_tree(source: &Path, target: &Path) -> Result<(), ConvertError> {
    let io_error = |path: &Path, source: std::io::Error| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    };

    for entry in WalkDir::new(source).into_iter().filter_entry(|e| !is_excluded(e)) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            io_error(&path, e.into())
        })?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let dest = target.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest).map_err(|e| io_error(&dest, e))?;
        } else {
            std::fs::copy(entry.path(), &dest).map_err(|e| io_error(&dest, e))?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "copy_tests.rs"]
mod tests;
