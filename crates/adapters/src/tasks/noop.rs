// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op task executor for conversion-only runs.

use super::{TaskError, TaskExecutor};
use async_trait::async_trait;
use std::path::Path;

/// Task executor that does nothing.
///
/// Used when only the conversions should be checked.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpTaskExecutor;

impl NoOpTaskExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TaskExecutor for NoOpTaskExecutor {
    async fn execute_tasks(&self, _recipe_folder: &Path, _tasks: &[String]) -> Result<(), TaskError> {
        Ok(())
    }
}
