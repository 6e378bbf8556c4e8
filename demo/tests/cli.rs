use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_default_run() {
    cargo_bin_cmd!("graph-bfs-demo")
        .assert()
        .success()
        .stdout("1 ; 3 ; 2 ; 4 ; 5 ; 6 ; \n1 : 0 ; 2 : 1 ; 3 : 1 ; 4 : 2 ; 5 : 3 ; 6 : 4 ; \n");
}

#[test]
fn test_append_order() {
    cargo_bin_cmd!("graph-bfs-demo")
        .args(["--edge-order", "append"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 ; 2 ; 3 ; 4 ; 5 ; 6 ; \n"));
}

#[test]
fn test_source_without_inbound_path_to_one() {
    cargo_bin_cmd!("graph-bfs-demo")
        .args(["--source", "6"])
        .assert()
        .success()
        .stdout("6 ; \n6 : 0 ; \n");
}

#[test]
fn test_json_output() {
    let output = cargo_bin_cmd!("graph-bfs-demo")
        .args(["--format", "json", "--source", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["source"], 2);
    assert_eq!(parsed["order"], serde_json::json!([2, 4, 5, 3, 6]));
    assert!(parsed["distances"].get("1").is_none());
    assert_eq!(parsed["distances"]["6"], 3);
}

#[test]
fn test_unknown_source_is_usage_error() {
    cargo_bin_cmd!("graph-bfs-demo")
        .args(["--source", "42"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no node with value 42"));
}

#[test]
fn test_bad_flag_is_usage_error() {
    cargo_bin_cmd!("graph-bfs-demo")
        .args(["--format", "yaml"])
        .assert()
        .code(2);
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    cargo_bin_cmd!("graph-bfs-demo")
        .arg("--verbose")
        .env_remove("RUST_LOG")
        .env_remove("GRAPH_BFS_LOG")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 ; 3 ; 2"))
        .stderr(predicate::str::contains("bfs complete"));
}

#[test]
fn test_log_json_keeps_stdout_clean() {
    let output = cargo_bin_cmd!("graph-bfs-demo")
        .args(["--log-json", "-v"])
        .env_remove("RUST_LOG")
        .env_remove("GRAPH_BFS_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "1 ; 3 ; 2 ; 4 ; 5 ; 6 ; \n1 : 0 ; 2 : 1 ; 3 : 1 ; 4 : 2 ; 5 : 3 ; 6 : 4 ; \n"
    );

    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty());
    for line in &lines {
        let parsed: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("stderr line is not JSON ({}): {}", e, line));
        assert!(parsed.get("level").is_some(), "no level in {}", line);
    }
    assert!(stderr.contains("bfs complete"));
}
