// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source command

use super::validate_all;
use clap::Args;
use rk_adapters::{RecipeConverter, TaskExecutor};
use rk_recipe::FullVersion;
use rk_validate::{Context, SourceValidator};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct SourceArgs {
    /// Recipe folder, or a folder containing recipes
    pub path: PathBuf,

    /// Validate against this AGP version only (e.g. 8.6.0)
    #[arg(long)]
    pub agp: Option<FullVersion>,
}

pub async fn handle<C: RecipeConverter, T: TaskExecutor>(
    args: SourceArgs,
    context: Arc<Context>,
    converter: C,
    executor: T,
) -> anyhow::Result<bool> {
    let mut validator = SourceValidator::new(context, converter, executor);
    if let Some(agp) = args.agp {
        validator = validator.with_agp_version(agp);
    }

    let validator = &validator;
    validate_all(&args.path, move |folder| async move {
        validator.validate(&folder, None).await
    })
    .await
}
