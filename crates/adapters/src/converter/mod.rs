// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recipe conversion between source and release modes

mod copy;

pub use copy::CopyConverter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeConverter;

use async_trait::async_trait;
use rk_recipe::{FullVersion, MetadataError, Mode, RecipeMetadata, VersionRange};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Outcome of a conversion or of a validation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultMode {
    Success,
    Failure,
    /// Version combination intentionally not handled
    Skip,
}

impl ResultMode {
    /// Combine two outcomes: any failure wins, then any skip
    pub fn combine(self, other: ResultMode) -> ResultMode {
        match (self, other) {
            (ResultMode::Failure, _) | (_, ResultMode::Failure) => ResultMode::Failure,
            (ResultMode::Skip, _) | (_, ResultMode::Skip) => ResultMode::Skip,
            _ => ResultMode::Success,
        }
    }

    pub fn is_success(self) -> bool {
        self == ResultMode::Success
    }
}

impl fmt::Display for ResultMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultMode::Success => write!(f, "success"),
            ResultMode::Failure => write!(f, "failure"),
            ResultMode::Skip => write!(f, "skip"),
        }
    }
}

/// Errors from conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error("recipe '{recipe}' ({range}) is not compatible with AGP {agp_version}")]
    IncompatibleVersion {
        recipe: String,
        agp_version: FullVersion,
        range: VersionRange,
    },
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parameters of a single conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Recipe folder to convert
    pub source: PathBuf,
    /// Parent directory receiving the converted recipe folder
    pub destination: PathBuf,
    pub mode: Mode,
    /// AGP version to pin (release mode only)
    pub agp_version: Option<FullVersion>,
    pub gradle_version: Option<String>,
    /// Treat an incompatible AGP version as an error instead of a skip
    pub strict_version_check: bool,
}

impl ConversionRequest {
    /// Request for a release copy pinned to `agp_version`
    pub fn release(
        source: &Path,
        destination: &Path,
        agp_version: FullVersion,
        gradle_version: Option<String>,
        strict_version_check: bool,
    ) -> Self {
        Self {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            mode: Mode::Release,
            agp_version: Some(agp_version),
            gradle_version,
            strict_version_check,
        }
    }

    /// Request for a version-agnostic source copy
    pub fn source(source: &Path, destination: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            mode: Mode::Source,
            agp_version: None,
            gradle_version: None,
            strict_version_check: false,
        }
    }
}

/// Result of a conversion
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub result_mode: ResultMode,
    /// Metadata of the converted recipe
    pub metadata: RecipeMetadata,
}

impl ConversionResult {
    /// Where the converted recipe lives under the request's destination
    pub fn recipe_folder(&self, destination: &Path) -> PathBuf {
        destination.join(&self.metadata.destination_folder)
    }
}

/// Converts a recipe folder into another mode
#[async_trait]
pub trait RecipeConverter: Clone + Send + Sync + 'static {
    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConvertError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
