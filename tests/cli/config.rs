use crate::support::{graphwalk, write_file, SQUARE_GRAPH};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_show_defaults() {
    let dir = tempdir().unwrap();
    graphwalk()
        .current_dir(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# source: built-in defaults"))
        .stdout(predicate::str::contains("order = \"dfs\""));
}

#[test]
fn test_config_show_local_file_json() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "graphwalk.toml", "[traversal]\norder = \"bfs\"\n");
    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["traversal"]["order"], "bfs");
    assert!(json["source"].as_str().unwrap().ends_with("graphwalk.toml"));
}

#[test]
fn test_config_order_used_by_traverse() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "graphwalk.toml", "[traversal]\norder = \"bfs\"\n");
    let graph = write_file(dir.path(), "g.json", SQUARE_GRAPH);
    graphwalk()
        .current_dir(dir.path())
        .args(["--quiet", "traverse"])
        .arg(&graph)
        .args(["--start", "a"])
        .assert()
        .success()
        .stdout("a\nb\nd\nc\n");
}

#[test]
fn test_config_directed_default() {
    let dir = tempdir().unwrap();
    let config = write_file(dir.path(), "custom.toml", "[graph]\ndirected = true\n");
    let graph = write_file(dir.path(), "g.json", r#"{"edges": [["a", "b"]]}"#);
    graphwalk()
        .arg("--config")
        .arg(&config)
        .arg("reachable")
        .arg(&graph)
        .args(["--from", "b", "--to", "a"])
        .assert()
        .success()
        .stdout("b does not reach a\n");
}

#[test]
fn test_config_explicit_path_missing() {
    graphwalk()
        .args(["--config", "/nonexistent/graphwalk.toml", "config", "show"])
        .assert()
        .code(2);
}

#[test]
fn test_config_malformed() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "graphwalk.toml", "[traversal]\norder = \"sideways\"\n");
    graphwalk()
        .current_dir(dir.path())
        .args(["config", "show"])
        .assert()
        .code(3);
}

#[test]
fn test_config_init_and_force() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("nested").join("config.toml");

    graphwalk()
        .args(["config", "init", "--path"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote"));
    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("[ladder]"));

    graphwalk()
        .args(["config", "init", "--path"])
        .arg(&target)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    graphwalk()
        .args(["config", "init", "--force", "--path"])
        .arg(&target)
        .assert()
        .success();
}

#[test]
fn test_config_init_user_dir() {
    let dir = tempdir().unwrap();
    graphwalk()
        .env("GRAPHWALK_CONFIG_DIR", dir.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("config.toml").exists());
}
