use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Undirected sample: a-b-c-d square with a heavy a-d edge, plus isolated z
#[allow(dead_code)]
pub const SQUARE_GRAPH: &str = r#"{
  "vertices": ["z"],
  "edges": [["a", "b"], ["b", "c"], ["a", "d", 5], ["c", "d", 1]]
}"#;

/// Get a Command for graphwalk that ignores any user-level config
pub fn graphwalk() -> Command {
    let mut cmd = cargo_bin_cmd!("graphwalk");
    cmd.env("GRAPHWALK_CONFIG_DIR", "/nonexistent/graphwalk-tests")
        .env_remove("GRAPHWALK_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("GRAPHWALK_LOG");
    cmd
}

/// Write `content` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
