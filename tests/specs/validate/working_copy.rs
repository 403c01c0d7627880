//! Working copy validation specs
//!
//! Verify a release-mode copy is converted back to source and validated.

use crate::prelude::*;

const RELEASE_RECIPE: &str = r#"
indexName = "Add a custom asset"
destinationFolder = "customAsset"

[agpVersion]
min = "8.0"

[gradleTasks]
tasks = ["assembleDebug"]
"#;

#[test]
fn working_copy_is_validated_from_source() {
    let temp = Project::with_context();
    temp.recipe("workingCopy", RELEASE_RECIPE);

    temp.rk()
        .args(&["working-copy", "workingCopy"])
        .passes()
        .stdout_has("workingCopy: success")
        .stdout_has("AGP 8.0.0")
        .stdout_has("AGP 8.5.1");

    // Release copies made from the source copy use the declared folder
    assert_eq!(
        temp.task_log(),
        vec!["customAsset assembleDebug", "customAsset assembleDebug"]
    );
}

#[test]
fn working_copy_task_failure_fails_the_run() {
    let temp = Project::with_context();
    temp.recipe("workingCopy", RELEASE_RECIPE);
    temp.executable("workingCopy/gradlew", FAILING_GRADLEW);

    temp.rk()
        .args(&["working-copy", "workingCopy"])
        .fails()
        .stdout_has("workingCopy: failure");
}

#[test]
fn working_copy_leaves_the_original_untouched() {
    let temp = Project::with_context();
    temp.recipe("workingCopy", RELEASE_RECIPE);

    temp.rk().args(&["working-copy", "workingCopy"]).passes();

    let entries: Vec<_> = std::fs::read_dir(temp.path().join("workingCopy"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries.len(), 2);
    assert!(entries.contains(&"gradlew".to_string()));
    assert!(entries.contains(&"recipe_metadata.toml".to_string()));
}

#[test]
fn working_copy_with_broken_metadata_fails() {
    let temp = Project::with_context();
    temp.recipe(
        "workingCopy",
        "indexName = 3\n[agpVersion]\nmin = \"8.0\"\n",
    );

    temp.rk()
        .args(&["working-copy", "workingCopy"])
        .fails()
        .stderr_has("'indexName' must be a string");
}
