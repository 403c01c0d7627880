// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locating recipe folders on disk

use crate::RECIPE_METADATA_FILE;
use std::path::{Path, PathBuf};

/// Whether `folder` directly contains a recipe metadata file
pub fn is_recipe_folder(folder: &Path) -> bool {
    folder.join(RECIPE_METADATA_FILE).is_file()
}

/// Recipe folders at `root`.
///
/// Returns `root` itself when it is a recipe, otherwise its immediate child
/// recipe folders sorted by name.
pub fn find_recipe_folders(root: &Path) -> std::io::Result<Vec<PathBuf>> {
    if is_recipe_folder(root) {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut folders = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() && is_recipe_folder(&path) {
            folders.push(path);
        }
    }
    folders.sort();
    Ok(folders)
}

/// The folder's own name, resolving `.` and similar through the filesystem
pub fn folder_name(folder: &Path) -> String {
    if let Some(name) = folder.file_name() {
        return name.to_string_lossy().into_owned();
    }
    folder
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| folder.display().to_string())
}

#[cfg(test)]
#[path = "discover_tests.rs"]
mod tests;
