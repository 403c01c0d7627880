// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake task executor for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{TaskError, TaskExecutor};
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Recorded task execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCall {
    pub recipe_folder: PathBuf,
    pub tasks: Vec<String>,
    /// Whether the folder existed when the tasks ran
    pub folder_existed: bool,
}

/// Fake task executor for testing
#[derive(Clone, Default)]
pub struct FakeTaskExecutor {
    calls: Arc<Mutex<Vec<TaskCall>>>,
    failing: Arc<Mutex<HashSet<String>>>,
}

impl FakeTaskExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<TaskCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Make every execution that includes `task` fail
    pub fn fail_on(&self, task: &str) {
        self.failing
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(task.to_string());
    }
}

#[async_trait]
impl TaskExecutor for FakeTaskExecutor {
    async fn execute_tasks(&self, recipe_folder: &Path, tasks: &[String]) -> Result<(), TaskError> {
        if tasks.is_empty() {
            return Ok(());
        }

        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(TaskCall {
                recipe_folder: recipe_folder.to_path_buf(),
                tasks: tasks.to_vec(),
                folder_existed: recipe_folder.is_dir(),
            });

        let failing = self.failing.lock().unwrap_or_else(|e| e.into_inner());
        if tasks.iter().any(|t| failing.contains(t)) {
            return Err(TaskError::Failed {
                tasks: tasks.to_vec(),
                code: Some(1),
                stderr: "FAILURE: Build failed with an exception.".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
