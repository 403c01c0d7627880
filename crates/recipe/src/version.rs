// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! AGP versions and compatibility ranges
//!
//! Recipes declare compatibility using short (`major.minor`) versions. Concrete
//! AGP releases carry a patch number and sometimes a pre-release qualifier
//! (`9.0.0-rc01`), which compatibility checks ignore.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static SHORT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)$").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static FULL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.(\d+)\.(\d+)(?:-([0-9A-Za-z.\-]+))?$")
        .expect("constant regex pattern is valid")
});

/// Errors from version parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("malformed version '{0}'")]
    Malformed(String),
}

/// A version truncated to `major.minor`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortVersion {
    pub major: u32,
    pub minor: u32,
}

impl ShortVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse a strict `major.minor` string
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let caps = SHORT_PATTERN
            .captures(text)
            .ok_or_else(|| VersionError::Malformed(text.to_string()))?;
        Ok(Self {
            major: parse_component(&caps[1], text)?,
            minor: parse_component(&caps[2], text)?,
        })
    }

    /// The `.0` patch release of this version
    pub fn to_full(self) -> FullVersion {
        FullVersion {
            major: self.major,
            minor: self.minor,
            patch: 0,
            qualifier: None,
        }
    }
}

impl fmt::Display for ShortVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for ShortVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ShortVersion {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShortVersion> for String {
    fn from(value: ShortVersion) -> Self {
        value.to_string()
    }
}

/// A concrete AGP version, e.g. `8.1.2` or `9.0.0-rc01`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FullVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Pre-release qualifier without the leading `-`
    pub qualifier: Option<String>,
}

impl FullVersion {
    /// Parse `major.minor.patch` with an optional `-qualifier`
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let caps = FULL_PATTERN
            .captures(text)
            .ok_or_else(|| VersionError::Malformed(text.to_string()))?;
        Ok(Self {
            major: parse_component(&caps[1], text)?,
            minor: parse_component(&caps[2], text)?,
            patch: parse_component(&caps[3], text)?,
            qualifier: caps.get(4).map(|m| m.as_str().to_string()),
        })
    }

    /// Drop patch and qualifier
    pub fn short(&self) -> ShortVersion {
        ShortVersion::new(self.major, self.minor)
    }

    pub fn is_preview(&self) -> bool {
        self.qualifier.is_some()
    }
}

impl fmt::Display for FullVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(qualifier) = &self.qualifier {
            write!(f, "-{}", qualifier)?;
        }
        Ok(())
    }
}

impl FromStr for FullVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FullVersion {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FullVersion> for String {
    fn from(value: FullVersion) -> Self {
        value.to_string()
    }
}

fn parse_component(digits: &str, text: &str) -> Result<u32, VersionError> {
    digits
        .parse()
        .map_err(|_| VersionError::Malformed(text.to_string()))
}

/// Range of AGP versions a recipe is compatible with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    pub min: ShortVersion,
    pub max: Option<ShortVersion>,
}

impl VersionRange {
    pub fn new(min: ShortVersion, max: Option<ShortVersion>) -> Self {
        Self { min, max }
    }

    /// Check a concrete version against the range.
    ///
    /// Only `major.minor` is compared, so a recipe declaring a min of an
    /// unreleased version still validates against its previews.
    pub fn is_compliant(&self, version: &FullVersion) -> bool {
        let version = version.short();
        match self.max {
            Some(max) => self.min <= version && version <= max,
            None => version >= self.min,
        }
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "[{}, {}]", self.min, max),
            None => write!(f, "[{}, +)", self.min),
        }
    }
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
