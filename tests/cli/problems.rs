use crate::support::{graphwalk, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Course schedule and tree validation
// ============================================================================

#[test]
fn test_schedule_feasible() {
    graphwalk()
        .args(["schedule", "--courses", "3", "--prereq", "1,0", "--prereq", "2,1"])
        .assert()
        .success()
        .stdout("feasible\norder: 0 1 2\n");
}

#[test]
fn test_schedule_cycle() {
    graphwalk()
        .args(["schedule", "--courses", "2", "--prereq", "1,0", "--prereq", "0,1"])
        .assert()
        .success()
        .stdout("infeasible: prerequisites form a cycle\n");
}

#[test]
fn test_schedule_no_prerequisites_json() {
    let output = graphwalk()
        .args(["--format", "json", "schedule", "--courses", "2"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["feasible"], true);
    assert_eq!(json["order"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_schedule_out_of_range_course() {
    graphwalk()
        .args(["schedule", "--courses", "2", "--prereq", "5,0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("5,0"));
}

#[test]
fn test_valid_tree() {
    graphwalk()
        .args(["valid-tree", "--nodes", "4", "--edge", "0,1", "--edge", "0,2", "--edge", "2,3"])
        .assert()
        .success()
        .stdout("valid tree\n");

    graphwalk()
        .args(["valid-tree", "--nodes", "4", "--edge", "0,1", "--edge", "2,3"])
        .assert()
        .success()
        .stdout("not a tree\n");
}

// ============================================================================
// Grids and matrices
// ============================================================================

#[test]
fn test_islands() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "map.txt", "11000\n11000\n00100\n00011\n");
    graphwalk()
        .arg("islands")
        .arg(&path)
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_islands_bad_character() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "map.txt", "110\n1x0\n");
    graphwalk()
        .arg("islands")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_islands_from_stdin_json() {
    graphwalk()
        .args(["--format", "json", "islands", "-"])
        .write_stdin("1 0 1\n0 0 0\n1 0 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"islands\": 4"));
}

#[test]
fn test_circles() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "m.json", "[[1,1,0],[1,1,0],[0,0,1]]");
    graphwalk()
        .arg("circles")
        .arg(&path)
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_circles_rejects_non_binary() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "m.json", "[[1,7],[7,1]]");
    graphwalk()
        .arg("circles")
        .arg(&path)
        .assert()
        .code(3);
}

#[test]
fn test_grid_path_detour() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "maze.txt", "...\n##.\n...\n");
    graphwalk()
        .arg("grid-path")
        .arg(&path)
        .args(["--from", "0,0", "--to", "2,0"])
        .assert()
        .success()
        .stdout("(0,0) -> (0,1) -> (0,2) -> (1,2) -> (2,2) -> (2,1) -> (2,0)\n(6 step(s))\n");
}

#[test]
fn test_grid_path_blocked_end() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "maze.txt", "..\n.#\n");
    graphwalk()
        .arg("grid-path")
        .arg(&path)
        .args(["--from", "0,0", "--to", "1,1"])
        .assert()
        .success()
        .stdout("no path\n");
}

// ============================================================================
// Word ladder
// ============================================================================

#[test]
fn test_ladder_with_word_flags() {
    let mut cmd = graphwalk();
    cmd.args(["ladder", "--begin", "hit", "--end", "cog"]);
    for word in ["hot", "dot", "dog", "lot", "log", "cog"] {
        cmd.args(["--word", word]);
    }
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("hit -> hot -> "))
        .stdout(predicate::str::contains("(5 words)"));
}

#[test]
fn test_ladder_with_word_file() {
    let dir = tempdir().unwrap();
    let words = write_file(dir.path(), "words.txt", "hot\ndot\ndog\n\nlot\nlog\n");
    graphwalk()
        .args(["ladder", "--begin", "hit", "--end", "cog", "--words"])
        .arg(&words)
        .assert()
        .success()
        .stdout("no ladder from hit to cog\n");
}

#[test]
fn test_ladder_needs_words() {
    graphwalk()
        .args(["ladder", "--begin", "hit", "--end", "cog"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("word list"));
}

#[test]
fn test_ladder_alphabet_from_config() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "graphwalk.toml", "[ladder]\nalphabet = \"o\"\n");
    graphwalk()
        .current_dir(dir.path())
        .args(["ladder", "--begin", "hit", "--end", "cog"])
        .args(["--word", "hot", "--word", "dot", "--word", "dog", "--word", "cog"])
        .assert()
        .success()
        .stdout("no ladder from hit to cog\n");
}

// ============================================================================
// Graph clone
// ============================================================================

#[test]
fn test_clone_graph() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "adj.json", "[[2,4],[1,3],[2,4],[1,3]]");
    graphwalk()
        .arg("clone-graph")
        .arg(&path)
        .assert()
        .success()
        .stdout("1: 2 4\n2: 1 3\n3: 2 4\n4: 1 3\n(4 node(s) copied)\n");
}

#[test]
fn test_clone_graph_empty_json() {
    graphwalk()
        .args(["--format", "json", "clone-graph", "-"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 0"));
}
