//! End-to-end completion queries against parsed manifests.
//!
//! JSON output is the contract with the shell integration scripts, so it is
//! pinned with inline snapshots.

use std::{fs, str::FromStr};

use cmdcomp_manifest::{Manifest, ManifestFile};

const DOCKERISH: &str = r#"
[app]
name = "dockerish"
description = "Container helper"

[root.subcommands.run]
alias = "r"
option = { type = "command", execute = "docker images --format '{{.Repository}}'" }

[root.subcommands.container]
alias = ["c", "ctr"]

[root.subcommands.container.subcommands.ls]
alias = "list"

[root.subcommands.container.subcommands.rm]
option = { type = "command", execute = "docker ps -aq" }

[root.subcommands.cp]
option = { type = "file", base_path = "." }

[root.subcommands.prune]
option = "--force"
"#;

fn manifest() -> Manifest {
    Manifest::from_str(DOCKERISH).expect("Failed to parse manifest")
}

fn json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).expect("Failed to serialize")
}

#[test]
fn test_root_candidates() {
    let candidates = manifest().candidates(Vec::<&str>::new()).unwrap();
    insta::assert_snapshot!(json(&candidates), @r#"
    [
      "run",
      "r",
      "container",
      "c",
      "ctr",
      "cp",
      "prune"
    ]
    "#);
}

#[test]
fn test_alias_path_candidates() {
    let candidates = manifest().candidates(["ctr"]).unwrap();
    insta::assert_snapshot!(json(&candidates), @r#"
    [
      "ls",
      "list",
      "rm"
    ]
    "#);
}

#[test]
fn test_command_candidates() {
    let candidates = manifest().candidates(["container", "rm"]).unwrap();
    insta::assert_snapshot!(json(&candidates), @r#"
    [
      {
        "command": "$(docker ps -aq)"
      }
    ]
    "#);
}

#[test]
fn test_file_and_string_candidates() {
    let manifest = manifest();
    assert_eq!(
        serde_json::to_string(&manifest.candidates(["cp"]).unwrap()).unwrap(),
        r#"[{"file":"."}]"#
    );
    assert_eq!(
        serde_json::to_string(&manifest.candidates(["prune"]).unwrap()).unwrap(),
        r#"["--force"]"#
    );
}

#[test]
fn test_leaf_without_option_is_empty_not_missing() {
    assert_eq!(manifest().candidates(["c", "ls"]), Some(vec![]));
    assert_eq!(manifest().candidates(["nope"]), None);
}

#[test]
fn test_nested_completions() {
    let completions = manifest().completions(["container"]).unwrap();
    insta::assert_snapshot!(json(&completions), @r#"
    {
      "ls": [],
      "rm": [
        {
          "command": "$(docker ps -aq)"
        }
      ]
    }
    "#);
}

#[test]
fn test_repeated_queries_are_identical() {
    let manifest = manifest();
    let first = json(&manifest.completions(Vec::<&str>::new()).unwrap());
    let second = json(&manifest.completions(Vec::<&str>::new()).unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_open_manifest_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cmdcomp.toml");
    fs::write(&path, DOCKERISH).unwrap();

    let file = ManifestFile::open(&path).unwrap();
    assert_eq!(file.path(), path.as_path());
    assert_eq!(file.content(), DOCKERISH);
    assert_eq!(file.manifest().app.name, "dockerish");
    assert_eq!(file.manifest().subcommand_count(), 6);

    let from_file = Manifest::from_file(&path).unwrap();
    assert_eq!(from_file.root, file.into_manifest().root);
}
