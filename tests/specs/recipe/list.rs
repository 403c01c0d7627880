//! Recipe listing specs

use crate::prelude::*;

#[test]
fn list_shows_every_recipe_in_a_folder() {
    let temp = Project::empty();
    temp.recipe("recipes/assets", OPEN_RECIPE);
    temp.recipe(
        "recipes/manifest",
        "[agpVersion]\nmin = \"8.1\"\nmax = \"8.5\"\n",
    );
    temp.file("recipes/notes/README.md", "not a recipe");

    temp.rk()
        .args(&["list", "recipes"])
        .passes()
        .stdout_has("assets")
        .stdout_has("Open recipe")
        .stdout_has("assembleDebug")
        .stdout_has("[8.1, 8.5]")
        .stdout_lacks("notes");
}

#[test]
fn list_uses_folder_name_when_index_name_is_missing() {
    let temp = Project::empty();
    temp.recipe("transformManifest", "[agpVersion]\nmin = \"8.1\"\n");

    temp.rk()
        .args(&["list", "transformManifest"])
        .passes()
        .stdout_has("transformManifest")
        .stdout_has("[8.1, +)");
}

#[test]
fn list_does_not_need_a_context_file() {
    let temp = Project::empty();
    temp.file("recipe_versions.toml", "not = [valid");
    temp.recipe("app", OPEN_RECIPE);

    temp.rk().args(&["list", "app"]).passes().stdout_has("app");
}

#[test]
fn list_reports_missing_min_version() {
    let temp = Project::empty();
    temp.recipe("good", OPEN_RECIPE);
    temp.recipe("broken", "[agpVersion]\nmax = \"8.5\"\n");

    temp.rk()
        .args(&["list", "."])
        .fails()
        .stdout_has("good")
        .stderr_has("did not find mandatory 'agpVersion.min'");
}

#[test]
fn list_reports_path_separator_in_destination_folder() {
    let temp = Project::empty();
    temp.recipe(
        "broken",
        "destinationFolder = \"../escape\"\n[agpVersion]\nmin = \"8.0\"\n",
    );

    temp.rk()
        .args(&["list", "broken"])
        .fails()
        .stderr_has("must be a plain folder name");
}

#[test]
fn list_fails_without_recipes() {
    let temp = Project::empty();
    temp.file("empty/README.md", "nothing here");

    temp.rk()
        .args(&["list", "empty"])
        .fails()
        .stderr_has("no recipe found");
}
