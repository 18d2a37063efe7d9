//! Phase 3 tests: CLI integration and end-to-end flows.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

// ==================== CLI Helpers ====================

/// Run the `gnx` CLI with the given arguments and return the output.
fn run_gnx(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gnx"))
        .args(args)
        .env_remove("GNX_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run gnx")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "gnx failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!("invalid JSON ({}): {}", e, stdout_str(output));
    })
}

fn write_file(contents: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(contents.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

fn complex_graph_file() -> NamedTempFile {
    write_file("5\nA B 1\nB C 2\nC D 3\nD E 4\nE A 5\nA C 6\nB D 7\nC E 8\n")
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_info() {
    let tmp = complex_graph_file();
    let path = tmp.path().to_str().unwrap();

    let output = run_gnx(&["info", path]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Vertices: 5"), "got: {}", out);
    assert!(out.contains("Edges: 8"), "got: {}", out);
    assert!(out.contains("Total weight: 36"), "got: {}", out);
}

#[test]
fn test_cli_paths_json() {
    let tmp = write_file("4\na b 1\nc d 2\n");
    let path = tmp.path().to_str().unwrap();

    let output = run_gnx(&["--format", "json", "paths", path, "--source", "a"]);
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["source"], "a");
    assert_eq!(json["distances"]["a"], 0);
    assert_eq!(json["distances"]["b"], 1);
    assert!(json["distances"]["c"].is_null());
    assert!(json["distances"]["d"].is_null());
}

#[test]
fn test_cli_paths_text_shows_inf() {
    let tmp = write_file("4\na b 1\nc d 2\n");
    let path = tmp.path().to_str().unwrap();

    let output = run_gnx(&["paths", path]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("c: inf"), "got: {}", out);
}

#[test]
fn test_cli_mst_and_forest() {
    let tmp = write_file("4\na b 1\nc d 2\n");
    let path = tmp.path().to_str().unwrap();

    let output = run_gnx(&["--format", "json", "mst", path]);
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["edges"].as_array().unwrap().len(), 1);
    assert_eq!(json["vertices_covered"], 2);

    let output = run_gnx(&["--format", "json", "mst", path, "--forest"]);
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["edges"].as_array().unwrap().len(), 2);
    assert_eq!(json["total_weight"], 3);
}

#[test]
fn test_cli_report() {
    let tmp = complex_graph_file();
    let path = tmp.path().to_str().unwrap();

    let output = run_gnx(&["--format", "json", "report", path, "--source", "A"]);
    assert_success(&output);
    let json = stdout_json(&output);
    let matched: Vec<&str> = json["matched"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(matched, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_cli_unknown_source() {
    let tmp = complex_graph_file();
    let path = tmp.path().to_str().unwrap();

    let output = run_gnx(&["paths", path, "--source", "Z"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_cli_exit_codes_for_load_errors() {
    let malformed = write_file("2\na b\n");
    let negative = write_file("2\na b -1\n");
    let mismatch = write_file("3\na b 1\n");

    let cases = [
        (malformed.path().to_str().unwrap(), 2),
        (negative.path().to_str().unwrap(), 3),
        (mismatch.path().to_str().unwrap(), 4),
        ("/nonexistent/graph.txt", 1),
    ];
    for (path, code) in cases {
        let output = run_gnx(&["info", path]);
        assert_eq!(output.status.code(), Some(code), "path {}", path);
    }
}

#[test]
fn test_cli_analyze_continues_after_error() {
    let bad = write_file("9\na b 1\n");
    let good = complex_graph_file();

    let output = run_gnx(&[
        "analyze",
        bad.path().to_str().unwrap(),
        good.path().to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(4));
    let out = stdout_str(&output);
    assert!(out.contains("Vertices: 5"), "good file not analyzed: {}", out);
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Declared 9 vertices"), "stderr: {}", err);
}

#[test]
fn test_cli_config_file() {
    let config = write_file("format = \"json\"\n[reader]\nallow_blank_lines = true\n");
    let graph = write_file("2\na b 1\n\n");

    // blank lines are rejected without the reader option
    let output = run_gnx(&["info", graph.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));

    let output = run_gnx(&[
        "--config",
        config.path().to_str().unwrap(),
        "info",
        graph.path().to_str().unwrap(),
    ]);
    assert_success(&output);
    assert_eq!(stdout_json(&output)["edges"], 1);
}

#[test]
fn test_cli_verbose_logs_effective_config() {
    let config = write_file("pretty = true\n");
    let graph = write_file("2\na b 1\n");
    let output = run_gnx(&[
        "--verbose",
        "--config",
        config.path().to_str().unwrap(),
        "info",
        graph.path().to_str().unwrap(),
    ]);
    assert_success(&output);
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Effective config"), "stderr: {}", err);
    assert!(err.contains("pretty: true"), "stderr: {}", err);
}

#[test]
fn test_cli_analyze_reads_each_file_once() {
    let first = complex_graph_file();
    let second = write_file("4\na b 1\nc d 2\n");
    let output = run_gnx(&[
        "--verbose",
        "analyze",
        first.path().to_str().unwrap(),
        second.path().to_str().unwrap(),
    ]);
    assert_success(&output);
    let err = String::from_utf8_lossy(&output.stderr);
    assert_eq!(err.matches("Reading graph from").count(), 2, "stderr: {}", err);

    let out = stdout_str(&output);
    assert!(out.contains("Vertices: 5"), "stdout: {}", out);
    assert!(out.contains("Minimum spanning tree"), "stdout: {}", out);
    assert!(out.contains("shortest path"), "stdout: {}", out);
}
