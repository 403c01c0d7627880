// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Recipe metadata and AGP version ranges

mod discover;
mod metadata;
mod mode;
mod version;

pub use discover::{find_recipe_folders, folder_name, is_recipe_folder};
pub use metadata::{MetadataError, RecipeMetadata, RECIPE_METADATA_FILE};
pub use mode::Mode;
pub use version::{FullVersion, ShortVersion, VersionError, VersionRange};
