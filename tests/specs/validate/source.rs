//! Source validation specs
//!
//! Verify which AGP versions a source recipe is validated against and how
//! the results map to the exit code.

use crate::prelude::*;

const BOUNDED_RECIPE: &str = r#"
[agpVersion]
min = "8.0"
max = "8.0"

[gradleTasks]
tasks = ["assembleDebug"]
validationTasks = ["verifyOutputs"]
"#;

#[test]
fn validates_min_and_latest_published_version() {
    let temp = Project::with_context();
    temp.recipe("app", OPEN_RECIPE);

    temp.rk()
        .args(&["source", "app"])
        .passes()
        .stdout_has("app: success")
        .stdout_has("AGP 8.0.0")
        .stdout_has("AGP 8.5.1")
        .stdout_has("Gradle 8.7")
        .stdout_has("1 passed, 0 skipped, 0 failed");

    assert_eq!(temp.task_log(), vec!["app assembleDebug", "app assembleDebug"]);
}

#[test]
fn validation_tasks_run_after_tasks() {
    let temp = Project::with_context();
    temp.recipe("app", BOUNDED_RECIPE);

    temp.rk().args(&["source", "app"]).passes();

    // min and max resolve to 8.0.0 and the published 8.0.2
    assert_eq!(
        temp.task_log(),
        vec![
            "app assembleDebug",
            "app verifyOutputs",
            "app assembleDebug",
            "app verifyOutputs",
        ]
    );
}

#[test]
fn tasks_run_in_the_declared_destination_folder() {
    let temp = Project::with_context();
    temp.recipe(
        "app",
        &format!("destinationFolder = \"published\"\n{}", OPEN_RECIPE),
    );

    temp.rk().args(&["source", "app"]).passes();

    assert!(temp.task_log().iter().all(|line| line == "published assembleDebug"));
}

#[test]
fn failing_tasks_fail_the_run() {
    let temp = Project::with_context();
    temp.recipe("app", OPEN_RECIPE);
    temp.executable("app/gradlew", FAILING_GRADLEW);

    temp.rk()
        .args(&["source", "app"])
        .fails()
        .stdout_has("app: failure")
        .stdout_has("AGP 8.0.0 failed: tasks [assembleDebug] failed")
        .stdout_has("0 passed, 0 skipped, 1 failed");

    // The second version still ran after the first failed
    assert_eq!(temp.task_log().len(), 2);
}

#[test]
fn local_build_state_is_not_copied() {
    let temp = Project::with_context();
    temp.recipe("app", OPEN_RECIPE);
    temp.file("app/build/outputs/app.apk", "binary");
    temp.file("app/local.properties", "sdk.dir=/opt/android");

    temp.rk().args(&["source", "app"]).passes();
}

#[test]
fn incompatible_pinned_version_is_skipped_on_ci() {
    let temp = Project::with_context();
    temp.recipe("app", BOUNDED_RECIPE);

    temp.rk()
        .args(&["--ci", "source", "app", "--agp", "8.5.1"])
        .passes()
        .stdout_has("app: skip")
        .stdout_has("0 passed, 1 skipped, 0 failed");

    assert!(temp.task_log().is_empty());
}

#[test]
fn incompatible_pinned_version_fails_outside_ci() {
    let temp = Project::with_context();
    temp.recipe("app", BOUNDED_RECIPE);

    temp.rk()
        .args(&["source", "app", "--agp", "8.5.1"])
        .fails()
        .stdout_has("not compatible with AGP 8.5.1");

    assert!(temp.task_log().is_empty());
}

#[test]
fn compatible_pinned_version_is_the_only_one_validated() {
    let temp = Project::with_context();
    temp.recipe("app", OPEN_RECIPE);

    temp.rk()
        .args(&["source", "app", "--agp", "8.5.1"])
        .passes()
        .stdout_has("AGP 8.5.1")
        .stdout_lacks("AGP 8.0.0");

    assert_eq!(temp.task_log().len(), 1);
}

#[test]
fn preview_versions_count_as_their_release() {
    let temp = Project::with_context();
    temp.recipe("app", BOUNDED_RECIPE);

    temp.rk()
        .args(&["source", "app", "--agp", "8.0.0-rc01"])
        .passes()
        .stdout_has("AGP 8.0.0-rc01")
        .stdout_has("success (preview)");
}

#[test]
fn no_tasks_only_converts() {
    let temp = Project::with_context();
    temp.recipe("app", OPEN_RECIPE);
    temp.executable("app/gradlew", FAILING_GRADLEW);

    temp.rk()
        .args(&["--no-tasks", "source", "app"])
        .passes()
        .stdout_has("app: success");

    assert!(temp.task_log().is_empty());
}

#[test]
fn every_recipe_in_a_folder_is_validated() {
    let temp = Project::with_context();
    temp.recipe("recipes/first", OPEN_RECIPE);
    temp.recipe("recipes/second", OPEN_RECIPE);
    temp.executable("recipes/second/gradlew", FAILING_GRADLEW);

    temp.rk()
        .args(&["source", "recipes"])
        .fails()
        .stdout_has("first: success")
        .stdout_has("second: failure")
        .stdout_has("1 passed, 0 skipped, 1 failed");
}

#[test]
fn broken_metadata_fails_that_recipe() {
    let temp = Project::with_context();
    temp.recipe("recipes/good", OPEN_RECIPE);
    temp.recipe("recipes/typo", "[agpVersion]\nmin = \"eight\"\n");

    temp.rk()
        .args(&["source", "recipes"])
        .fails()
        .stdout_has("good: success")
        .stdout_has("1 errors")
        .stderr_has("unable to parse 'agpVersion.min' with value 'eight'");
}

#[test]
fn inverted_range_is_rejected() {
    let temp = Project::with_context();
    temp.recipe("app", "[agpVersion]\nmin = \"8.5\"\nmax = \"8.0\"\n");

    temp.rk()
        .args(&["source", "app"])
        .fails()
        .stderr_has("lower than agpVersion.min");
}

#[test]
fn parent_destination_folder_is_rejected() {
    let temp = Project::with_context();
    temp.recipe(
        "app",
        &format!("destinationFolder = \"..\"\n{}", OPEN_RECIPE),
    );

    temp.rk()
        .args(&["source", "app"])
        .fails()
        .stderr_has("must be a plain folder name");

    assert!(temp.task_log().is_empty());
}
