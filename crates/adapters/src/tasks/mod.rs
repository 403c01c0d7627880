// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build task execution adapters

mod gradle;
mod noop;

pub use gradle::GradleTaskExecutor;
pub use noop::NoOpTaskExecutor;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeTaskExecutor, TaskCall};

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from task execution
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("recipe folder does not exist: {}", .0.display())]
    MissingFolder(PathBuf),
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("tasks [{}] failed ({}): {stderr}", .tasks.join(", "), describe_exit(.code))]
    Failed {
        tasks: Vec<String>,
        code: Option<i32>,
        stderr: String,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Runs build tasks inside a materialized recipe folder
#[async_trait]
pub trait TaskExecutor: Clone + Send + Sync + 'static {
    /// Run `tasks` in order in `recipe_folder`. An empty list does nothing.
    async fn execute_tasks(&self, recipe_folder: &Path, tasks: &[String]) -> Result<(), TaskError>;
}
