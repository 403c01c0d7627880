//! Shared fixtures for CLI specs

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;

/// Published versions used by most specs
pub const CONTEXT: &str = r#"
[versions]
"8.0" = { agp = "8.0.2", gradle = "8.0" }
"8.5" = { agp = "8.5.1", gradle = "8.7" }
"#;

/// Recipe compatible with every published version
pub const OPEN_RECIPE: &str = r#"
indexName = "Open recipe"

[agpVersion]
min = "8.0"

[gradleTasks]
tasks = ["assembleDebug"]
"#;

/// Wrapper that records its tasks and fails on leftover build state
pub const PASSING_GRADLEW: &str = r#"#!/bin/sh
if [ -e build ] || [ -e local.properties ]; then
  echo "local build state was copied" >&2
  exit 1
fi
echo "$(basename "$PWD") $*" >> "$RK_SPEC_TASK_LOG"
"#;

pub const FAILING_GRADLEW: &str = r#"#!/bin/sh
echo "$(basename "$PWD") $*" >> "$RK_SPEC_TASK_LOG"
echo "FAILURE: Build failed with an exception." >&2
exit 1
"#;

const TASK_LOG: &str = "tasks.log";

static BUILD: Once = Once::new();

/// Path to the rk binary, building it on first use
fn rk_bin() -> PathBuf {
    BUILD.call_once(|| {
        let status = std::process::Command::new(env!("CARGO"))
            .args(["build", "--quiet", "-p", "rk"])
            .status()
            .expect("failed to run cargo build");
        assert!(status.success(), "building rk failed");
    });
    assert_cmd::cargo::cargo_bin("rk")
}

/// Temporary project directory the CLI runs in
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Project with the default context file
    pub fn with_context() -> Self {
        let project = Self::empty();
        project.file("recipe_versions.toml", CONTEXT);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, path: &str, content: &str) {
        let path = self.path().join(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn executable(&self, path: &str, content: &str) {
        self.file(path, content);
        let path = self.path().join(path);
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Recipe folder with metadata and a passing wrapper
    pub fn recipe(&self, folder: &str, metadata: &str) {
        self.file(&format!("{}/recipe_metadata.toml", folder), metadata);
        self.executable(&format!("{}/gradlew", folder), PASSING_GRADLEW);
    }

    /// Task invocations recorded by the wrappers, as "<folder> <tasks>"
    pub fn task_log(&self) -> Vec<String> {
        std::fs::read_to_string(self.path().join(TASK_LOG))
            .map(|log| log.lines().map(String::from).collect())
            .unwrap_or_default()
    }

    pub fn rk(&self) -> CliBuilder {
        let mut cmd = Command::new(rk_bin());
        cmd.current_dir(self.path())
            .env_remove("CI")
            .env_remove("RK_CONFIG")
            .env_remove("RUST_LOG")
            .env("RK_SPEC_TASK_LOG", self.path().join(TASK_LOG));
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> RunAssert {
        RunAssert(self.cmd.assert().success())
    }

    pub fn fails(mut self) -> RunAssert {
        RunAssert(self.cmd.assert().failure())
    }
}

pub struct RunAssert(Assert);

impl RunAssert {
    pub fn stdout_has(self, expected: &str) -> Self {
        Self(self.0.stdout(predicate::str::contains(expected)))
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        Self(self.0.stdout(predicate::str::contains(unexpected).not()))
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        Self(self.0.stderr(predicate::str::contains(expected)))
    }
}
