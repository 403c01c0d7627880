// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! List command

use super::recipe_folders;
use clap::Args;
use rk_recipe::{folder_name, Mode, RecipeMetadata};
use std::path::PathBuf;

#[derive(Args)]
pub struct ListArgs {
    /// Recipe folder, or a folder containing recipes
    pub path: PathBuf,
}

pub fn handle(args: ListArgs) -> anyhow::Result<bool> {
    let folders = recipe_folders(&args.path)?;
    let mut passed = true;

    println!("{:<24} {:<32} {:<14} TASKS", "FOLDER", "NAME", "AGP");
    for folder in folders {
        let metadata = match RecipeMetadata::load_from(&folder, Mode::Release) {
            Ok(metadata) => metadata,
            Err(e) => {
                eprintln!("error: {}", e);
                passed = false;
                continue;
            }
        };

        let tasks = if metadata.tasks.is_empty() {
            "-".to_string()
        } else {
            metadata.tasks.join(" ")
        };
        println!(
            "{:<24} {:<32} {:<14} {}",
            folder_name(&folder),
            metadata.index_name,
            metadata.version_range.to_string(),
            tasks
        );
    }

    Ok(passed)
}
