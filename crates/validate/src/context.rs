// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation context: CI mode and published version lookups
//!
//! ```toml
//! ci = false
//! gradle_path = "/opt/gradle"
//!
//! [versions]
//! "8.0" = { agp = "8.0.2", gradle = "8.0" }
//! "9.0" = { agp = "9.0.0-rc01", gradle = "9.0.0" }
//! ```

use rk_recipe::{FullVersion, ShortVersion};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading the context file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("version key {key} maps to AGP {agp}")]
    MismatchedVersion { key: ShortVersion, agp: FullVersion },
}

/// Published AGP release for a short version and the Gradle it needs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionMapping {
    pub agp: FullVersion,
    pub gradle: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ContextFile {
    #[serde(default)]
    ci: bool,
    gradle_path: Option<PathBuf>,
    #[serde(default)]
    versions: BTreeMap<ShortVersion, VersionMapping>,
}

/// Everything the validators need to know about the environment
#[derive(Debug, Clone, Default)]
pub struct Context {
    ci: bool,
    gradle_path: Option<PathBuf>,
    versions: BTreeMap<ShortVersion, VersionMapping>,
}

impl Context {
    pub fn new(ci: bool) -> Self {
        Self {
            ci,
            ..Self::default()
        }
    }

    /// Register a published AGP version and its Gradle version
    pub fn with_version(mut self, agp: FullVersion, gradle: &str) -> Self {
        self.versions.insert(
            agp.short(),
            VersionMapping {
                agp,
                gradle: gradle.to_string(),
            },
        );
        self
    }

    /// Pin a local Gradle installation
    pub fn with_gradle_path(mut self, path: PathBuf) -> Self {
        self.gradle_path = Some(path);
        self
    }

    pub fn set_ci(&mut self, ci: bool) {
        self.ci = ci;
    }

    /// Load a context file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse context file content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ContextFile = toml::from_str(content)?;

        for (key, mapping) in &file.versions {
            if mapping.agp.short() != *key {
                return Err(ConfigError::MismatchedVersion {
                    key: *key,
                    agp: mapping.agp.clone(),
                });
            }
        }

        Ok(Self {
            ci: file.ci,
            gradle_path: file.gradle_path,
            versions: file.versions,
        })
    }

    /// Whether this run happens on CI, where incompatible versions are skipped
    pub fn ci(&self) -> bool {
        self.ci
    }

    pub fn gradle_path(&self) -> Option<&Path> {
        self.gradle_path.as_deref()
    }

    /// Latest published AGP version
    pub fn max_published_version(&self) -> Option<&FullVersion> {
        self.versions.values().next_back().map(|m| &m.agp)
    }

    /// Published AGP release for a short version
    pub fn published_version(&self, version: ShortVersion) -> Option<&FullVersion> {
        self.versions.get(&version).map(|m| &m.agp)
    }

    /// Gradle version matching an AGP short version
    pub fn gradle_version(&self, version: ShortVersion) -> Option<&str> {
        self.versions.get(&version).map(|m| m.gradle.as_str())
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
