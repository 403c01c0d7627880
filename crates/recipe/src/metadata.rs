// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recipe metadata (`recipe_metadata.toml`) loading
//!
//! ```toml
//! indexName = "Transform an asset"
//! destinationFolder = "transformAsset"
//!
//! [agpVersion]
//! min = "8.0"
//! max = "8.5"
//!
//! [gradleTasks]
//! tasks = ["assembleDebug"]
//! validationTasks = ["checkAsset"]
//!
//! [indexMetadata]
//! index = ["Android Assets", "Call chains/transform"]
//! ```

use crate::{folder_name, Mode, ShortVersion, VersionRange};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Name of the descriptor file that marks a folder as a recipe
pub const RECIPE_METADATA_FILE: &str = "recipe_metadata.toml";

/// Errors that can occur while loading recipe metadata
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parsing error(s) for {}: {}", .path.display(), .diagnostics.join("; "))]
    Malformed {
        path: PathBuf,
        diagnostics: Vec<String>,
    },
    #[error("did not find mandatory '{field}' in recipe '{recipe}'")]
    MissingField { field: String, recipe: String },
    #[error("unable to parse '{field}' with value '{value}' in recipe '{recipe}'")]
    MalformedVersion {
        field: String,
        value: String,
        recipe: String,
    },
    #[error("'{field}' must be {expected} in recipe '{recipe}'")]
    InvalidType {
        field: String,
        expected: &'static str,
        recipe: String,
    },
    #[error("destinationFolder value ('{value}') must be a plain folder name (recipe '{recipe}')")]
    InvalidDestinationFolder { value: String, recipe: String },
    #[error("agpVersion.max ({max}) is lower than agpVersion.min ({min}) in recipe '{recipe}'")]
    InvalidVersionRange {
        min: ShortVersion,
        max: ShortVersion,
        recipe: String,
    },
}

/// Content of a recipe's `recipe_metadata.toml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeMetadata {
    /// Name of the recipe shown in the index
    pub index_name: String,
    /// Name of the folder that should contain the recipe
    pub destination_folder: String,
    pub version_range: VersionRange,
    /// Tasks to run once the recipe is converted
    pub tasks: Vec<String>,
    /// Extra tasks run only during validation.
    ///
    /// `None` when the field is absent, which is not the same as an empty list.
    pub validation_tasks: Option<Vec<String>>,
    /// Tags for the recipe index
    pub keywords: Vec<String>,
}

impl RecipeMetadata {
    /// Load metadata from `folder/recipe_metadata.toml`
    pub fn load_from(folder: &Path, mode: Mode) -> Result<Self, MetadataError> {
        let path = folder.join(RECIPE_METADATA_FILE);
        let content = std::fs::read_to_string(&path).map_err(|source| MetadataError::Io {
            path: path.clone(),
            source,
        })?;

        let table: toml::Table = toml::from_str(&content).map_err(|e| MetadataError::Malformed {
            path: path.clone(),
            diagnostics: e.to_string().lines().map(String::from).collect(),
        })?;

        Self::from_table(&table, &folder_name(folder), mode)
    }

    /// Parse metadata content for the recipe folder named `folder_name`
    pub fn parse(content: &str, folder_name: &str, mode: Mode) -> Result<Self, MetadataError> {
        let table: toml::Table = toml::from_str(content).map_err(|e| MetadataError::Malformed {
            path: PathBuf::from(folder_name).join(RECIPE_METADATA_FILE),
            diagnostics: e.to_string().lines().map(String::from).collect(),
        })?;
        Self::from_table(&table, folder_name, mode)
    }

    fn from_table(table: &toml::Table, folder_name: &str, mode: Mode) -> Result<Self, MetadataError> {
        let fields = Fields {
            table,
            recipe: folder_name,
        };

        let declared_index_name = non_blank(fields.string("indexName")?);
        let declared_destination = non_blank(fields.string("destinationFolder")?);

        // Anything but a single folder name would let the copy escape its parent
        if let Some(value) = declared_destination {
            if !is_plain_folder_name(value) {
                return Err(MetadataError::InvalidDestinationFolder {
                    value: value.to_string(),
                    recipe: folder_name.to_string(),
                });
            }
        }

        // Only published release copies carry curated names
        let (index_name, destination_folder) = match mode {
            Mode::Release => (
                declared_index_name.unwrap_or(folder_name).to_string(),
                declared_destination.unwrap_or(folder_name).to_string(),
            ),
            Mode::Source => (folder_name.to_string(), folder_name.to_string()),
        };

        let min = fields
            .string("agpVersion.min")?
            .ok_or_else(|| MetadataError::MissingField {
                field: "agpVersion.min".to_string(),
                recipe: folder_name.to_string(),
            })?;
        let min = fields.version("agpVersion.min", min)?;

        let max = match fields.string("agpVersion.max")? {
            Some(max) => Some(fields.version("agpVersion.max", max)?),
            None => None,
        };

        if let Some(max) = max {
            if max < min {
                return Err(MetadataError::InvalidVersionRange {
                    min,
                    max,
                    recipe: folder_name.to_string(),
                });
            }
        }

        Ok(Self {
            index_name,
            destination_folder,
            version_range: VersionRange::new(min, max),
            tasks: fields.strings("gradleTasks.tasks")?.unwrap_or_default(),
            validation_tasks: fields.strings("gradleTasks.validationTasks")?,
            keywords: fields.strings("indexMetadata.index")?.unwrap_or_default(),
        })
    }
}

/// Typed access to dotted keys of the metadata table
struct Fields<'a> {
    table: &'a toml::Table,
    recipe: &'a str,
}

impl<'a> Fields<'a> {
    fn get(&self, key: &str) -> Result<Option<&'a toml::Value>, MetadataError> {
        let mut current = self.table;
        let mut segments = key.split('.').peekable();
        let mut walked = String::new();

        while let Some(segment) = segments.next() {
            if !walked.is_empty() {
                walked.push('.');
            }
            walked.push_str(segment);

            let Some(value) = current.get(segment) else {
                return Ok(None);
            };
            if segments.peek().is_none() {
                return Ok(Some(value));
            }
            current = value
                .as_table()
                .ok_or_else(|| self.invalid_type(&walked, "a table"))?;
        }

        Ok(None)
    }

    fn string(&self, key: &str) -> Result<Option<&'a str>, MetadataError> {
        match self.get(key)? {
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| self.invalid_type(key, "a string")),
            None => Ok(None),
        }
    }

    /// Array elements coerced to text
    fn strings(&self, key: &str) -> Result<Option<Vec<String>>, MetadataError> {
        let Some(value) = self.get(key)? else {
            return Ok(None);
        };
        let array = value
            .as_array()
            .ok_or_else(|| self.invalid_type(key, "an array"))?;

        Ok(Some(
            array
                .iter()
                .map(|v| match v.as_str() {
                    Some(s) => s.to_string(),
                    None => v.to_string(),
                })
                .collect(),
        ))
    }

    fn version(&self, key: &str, value: &str) -> Result<ShortVersion, MetadataError> {
        ShortVersion::parse(value).map_err(|_| MetadataError::MalformedVersion {
            field: key.to_string(),
            value: value.to_string(),
            recipe: self.recipe.to_string(),
        })
    }

    fn invalid_type(&self, key: &str, expected: &'static str) -> MetadataError {
        MetadataError::InvalidType {
            field: key.to_string(),
            expected,
            recipe: self.recipe.to_string(),
        }
    }
}

/// A single normal path component, with no separator of either platform
fn is_plain_folder_name(value: &str) -> bool {
    if value.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(value).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "metadata_tests.rs"]
mod tests;
