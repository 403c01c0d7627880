// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Working copy command

use super::validate_all;
use clap::Args;
use rk_adapters::{RecipeConverter, TaskExecutor};
use rk_validate::{Context, WorkingCopyValidator};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct WorkingCopyArgs {
    /// Release-mode recipe folder, or a folder containing them
    pub path: PathBuf,
}

pub async fn handle<C: RecipeConverter, T: TaskExecutor>(
    args: WorkingCopyArgs,
    context: Arc<Context>,
    converter: C,
    executor: T,
) -> anyhow::Result<bool> {
    let validator = WorkingCopyValidator::new(context, converter, executor);

    let validator = &validator;
    validate_all(&args.path, move |folder| async move {
        validator.validate(&folder).await
    })
    .await
}
