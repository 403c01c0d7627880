// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gradle task executor

use super::{TaskError, TaskExecutor};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Lines of stderr kept in failure reports
const STDERR_TAIL_LINES: usize = 20;

/// Runs tasks with Gradle.
///
/// Uses the pinned Gradle installation when one is configured, otherwise the
/// recipe's own `gradlew` wrapper, otherwise `gradle` from `PATH`.
#[derive(Clone, Debug, Default)]
pub struct GradleTaskExecutor {
    gradle_path: Option<PathBuf>,
}

impl GradleTaskExecutor {
    pub fn new(gradle_path: Option<PathBuf>) -> Self {
        Self { gradle_path }
    }

    /// Program used to run tasks in `recipe_folder`
    pub fn program(&self, recipe_folder: &Path) -> PathBuf {
        if let Some(home) = &self.gradle_path {
            return home.join("bin").join("gradle");
        }
        let wrapper = recipe_folder.join("gradlew");
        if wrapper.is_file() {
            wrapper
        } else {
            PathBuf::from("gradle")
        }
    }
}

#[async_trait]
impl TaskExecutor for GradleTaskExecutor {
    async fn execute_tasks(&self, recipe_folder: &Path, tasks: &[String]) -> Result<(), TaskError> {
        if tasks.is_empty() {
            return Ok(());
        }
        if !recipe_folder.is_dir() {
            return Err(TaskError::MissingFolder(recipe_folder.to_path_buf()));
        }

        let program = self.program(recipe_folder);
        let output = Command::new(&program)
            .current_dir(recipe_folder)
            .args(tasks)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| TaskError::Spawn {
                program: program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let lines: Vec<&str> = stderr.lines().collect();
            let tail = lines[lines.len().saturating_sub(STDERR_TAIL_LINES)..].join("\n");
            return Err(TaskError::Failed {
                tasks: tasks.to_vec(),
                code: output.status.code(),
                stderr: tail,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "gradle_tests.rs"]
mod tests;
