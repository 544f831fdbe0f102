use crate::support::{graphwalk, write_file, SQUARE_GRAPH};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn test_traverse_dfs_default() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "g.json", SQUARE_GRAPH);
    graphwalk()
        .current_dir(dir.path())
        .arg("traverse")
        .arg(&path)
        .args(["--start", "a"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("a\nb\nc\nd\n"))
        .stdout(predicate::str::contains("(4 visited, dfs)"));
}

#[test]
fn test_traverse_bfs_quiet() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "g.json", SQUARE_GRAPH);
    graphwalk()
        .current_dir(dir.path())
        .args(["--quiet", "traverse"])
        .arg(&path)
        .args(["--start", "a", "--order", "bfs"])
        .assert()
        .success()
        .stdout("a\nb\nd\nc\n");
}

#[test]
fn test_traverse_json() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "g.json", SQUARE_GRAPH);
    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "traverse"])
        .arg(&path)
        .args(["--start", "z", "--order", "dfs-iterative"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["order"], "dfs-iterative");
    assert_eq!(json["visited"], serde_json::json!(["z"]));
}

#[test]
fn test_traverse_reads_stdin() {
    graphwalk()
        .args(["--quiet", "traverse", "-", "--start", "x"])
        .write_stdin(r#"{"directed": true, "edges": [["x", "y"], ["y", "x"]]}"#)
        .assert()
        .success()
        .stdout("x\ny\n");
}

#[test]
fn test_direction_override() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "g.json", r#"{"edges": [["a", "b"]]}"#);

    graphwalk()
        .args(["--quiet", "traverse"])
        .arg(&path)
        .args(["--start", "b"])
        .assert()
        .success()
        .stdout("b\na\n");

    graphwalk()
        .args(["--quiet", "traverse"])
        .arg(&path)
        .args(["--start", "b", "--directed"])
        .assert()
        .success()
        .stdout("b\n");
}

// ============================================================================
// Connectivity and paths
// ============================================================================

#[test]
fn test_reachable() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "g.json", SQUARE_GRAPH);

    graphwalk()
        .arg("reachable")
        .arg(&path)
        .args(["--from", "a", "--to", "d"])
        .assert()
        .success()
        .stdout("a reaches d\n");

    graphwalk()
        .arg("reachable")
        .arg(&path)
        .args(["--from", "a", "--to", "z"])
        .assert()
        .success()
        .stdout("a does not reach z\n");
}

#[test]
fn test_components() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "g.json", SQUARE_GRAPH);
    graphwalk()
        .arg("components")
        .arg(&path)
        .assert()
        .success()
        .stdout("1: z\n2: a b c d\n2 component(s)\n");
}

#[test]
fn test_components_json() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "g.json", SQUARE_GRAPH);
    let output = graphwalk()
        .args(["--format", "json", "components"])
        .arg(&path)
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["components"][1], serde_json::json!(["a", "b", "c", "d"]));
}

#[test]
fn test_path_fewest_hops() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "g.json", SQUARE_GRAPH);
    graphwalk()
        .arg("path")
        .arg(&path)
        .args(["--from", "a", "--to", "c"])
        .assert()
        .success()
        .stdout("a -> b -> c\n(2 hop(s))\n");
}

#[test]
fn test_path_none() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "g.json", SQUARE_GRAPH);
    let output = graphwalk()
        .args(["--format", "json", "path"])
        .arg(&path)
        .args(["--from", "a", "--to", "z"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["path"], serde_json::json!([]));
    assert!(json["hops"].is_null());
}

// ============================================================================
// Dijkstra
// ============================================================================

#[test]
fn test_dijkstra_all_distances() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "g.json", SQUARE_GRAPH);
    graphwalk()
        .arg("dijkstra")
        .arg(&path)
        .args(["--from", "a"])
        .assert()
        .success()
        .stdout("z\tunreachable\na\t0\nb\t1\nc\t2\nd\t3\n");
}

#[test]
fn test_dijkstra_single_target() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "g.json", SQUARE_GRAPH);
    graphwalk()
        .arg("dijkstra")
        .arg(&path)
        .args(["--from", "a", "--to", "d"])
        .assert()
        .success()
        .stdout("a -> b -> c -> d\n(distance 3)\n");
}

#[test]
fn test_dijkstra_json_unreachable_is_null() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "g.json", SQUARE_GRAPH);
    let output = graphwalk()
        .args(["--format", "json", "dijkstra"])
        .arg(&path)
        .args(["--from", "a"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["distances"]["d"], 3.0);
    assert!(json["distances"]["z"].is_null());
}

#[test]
fn test_dijkstra_unknown_target() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "g.json", SQUARE_GRAPH);
    graphwalk()
        .arg("dijkstra")
        .arg(&path)
        .args(["--from", "a", "--to", "nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex not found: nope"));
}

// ============================================================================
// Cycles
// ============================================================================

#[test]
fn test_cycle_acyclic_prints_order() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "dag.json", r#"{"edges": [["a", "b"], ["b", "c"]]}"#);
    graphwalk()
        .arg("cycle")
        .arg(&path)
        .assert()
        .success()
        .stdout("acyclic\norder: a b c\n");
}

#[test]
fn test_cycle_detected() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "loop.json", r#"{"edges": [["a", "b"], ["b", "a"]]}"#);
    let output = graphwalk()
        .args(["--format", "json", "cycle"])
        .arg(&path)
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["has_cycle"], true);
    assert!(json["order"].is_null());
}

#[test]
fn test_cycle_undirected_override() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "dag.json", r#"{"edges": [["a", "b"]]}"#);
    graphwalk()
        .arg("cycle")
        .arg(&path)
        .arg("--undirected")
        .assert()
        .success()
        .stdout("cycle detected\n");
}
