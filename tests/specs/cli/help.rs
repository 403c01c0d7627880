//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    let temp = Project::empty();

    temp.rk()
        .args(&["--help"])
        .passes()
        .stdout_has("source")
        .stdout_has("working-copy")
        .stdout_has("list");
}

#[test]
fn source_help_mentions_agp_flag() {
    let temp = Project::empty();

    temp.rk()
        .args(&["source", "--help"])
        .passes()
        .stdout_has("--agp")
        .stdout_has("--no-tasks");
}

#[test]
fn missing_subcommand_fails() {
    let temp = Project::empty();

    temp.rk().fails().stderr_has("Usage");
}
