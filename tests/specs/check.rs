//! Behavioral specs for `outmatch check`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// VERDICTS
// =============================================================================

/// > Required patterns found in order and no exclusions: exit 0
#[test]
fn passing_log_exits_zero() {
    outmatch_cmd()
        .args(["check", "build.log"])
        .current_dir(fixture("build-pass"))
        .assert()
        .success()
        .stdout(predicates::str::contains("Build succeeded\nTests: 5 passed\ndone\n"))
        .stdout(predicates::str::contains(
            "PASS: 2 of 2 required patterns matched in 4 lines",
        ));
}

/// > Any excluded line fails the check, even when all required patterns match
#[test]
fn excluded_line_exits_one() {
    outmatch_cmd()
        .args(["check", "build.log"])
        .current_dir(fixture("build-excluded"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains("FAIL: 2 of 2 required patterns matched"))
        .stdout(predicates::str::contains("excluded patterns found in 1 line:"))
        .stdout(predicates::str::contains("  2: ERROR: oops  [ERROR]"));
}

/// > A later line cannot satisfy an earlier unmatched pattern
#[test]
fn out_of_order_lines_exit_one() {
    outmatch_cmd()
        .args(["check", "build.log"])
        .current_dir(fixture("build-out-of-order"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains(
            "required pattern not found: B (1 of 2 matched)",
        ));
}

/// > With no LOG argument, stdin is verified
#[test]
fn reads_stdin_without_log_argument() {
    outmatch_cmd()
        .arg("check")
        .current_dir(fixture("build-pass"))
        .write_stdin("Build succeeded\nTests: 12 passed\n")
        .assert()
        .success();
}

// =============================================================================
// OUTPUT OPTIONS
// =============================================================================

/// > --quiet suppresses the line echo but keeps the verdict
#[test]
fn quiet_suppresses_echo() {
    outmatch_cmd()
        .args(["check", "--quiet", "build.log"])
        .current_dir(fixture("build-pass"))
        .assert()
        .success()
        .stdout(predicates::str::contains("Loading project definition").not())
        .stdout(predicates::str::starts_with("PASS"));
}

/// > JSON output keeps stdout machine-readable; echo moves to stderr
#[test]
fn json_output_is_parseable() {
    let output = outmatch_cmd()
        .args(["check", "-o", "json", "build.log"])
        .current_dir(fixture("build-excluded"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["passed"], false);
    assert_eq!(value["report"]["violations"][0]["line"], "ERROR: oops");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Build succeeded"));
}

// =============================================================================
// PATTERN FILES
// =============================================================================

/// > Missing excludes.txt means no exclusions
#[test]
fn missing_default_excludes_is_not_an_error() {
    let temp = Project::empty();
    temp.required(&["done"]);
    temp.file("build.log", "ERROR but nobody cares\ndone\n");

    outmatch_cmd()
        .args(["check", "build.log"])
        .current_dir(temp.path())
        .assert()
        .success();
}

/// > An explicit --excludes file must exist
#[test]
fn missing_explicit_excludes_is_an_error() {
    let temp = Project::empty();
    temp.required(&["done"]);
    temp.file("build.log", "done\n");

    outmatch_cmd()
        .args(["check", "--excludes", "forbidden.txt", "build.log"])
        .current_dir(temp.path())
        .assert()
        .code(3)
        .stderr(predicates::str::contains("forbidden.txt"));
}

/// > Required output file is mandatory
#[test]
fn missing_required_file_is_an_error() {
    let temp = Project::empty();
    temp.file("build.log", "done\n");

    outmatch_cmd()
        .args(["check", "build.log"])
        .current_dir(temp.path())
        .assert()
        .code(3)
        .stderr(predicates::str::contains("output.txt"));
}

/// > Malformed pattern fails at load time
#[test]
fn malformed_pattern_exits_two() {
    outmatch_cmd()
        .args(["check", "build.log"])
        .current_dir(fixture("bad-pattern"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid pattern"))
        .stderr(predicates::str::contains("output.txt:2"));
}

/// > An empty required file is rejected
#[test]
fn empty_required_file_exits_two() {
    let temp = Project::empty();
    temp.file("output.txt", "");
    temp.file("build.log", "done\n");

    outmatch_cmd()
        .args(["check", "build.log"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("no required patterns"));
}

/// > File names come from outmatch.toml
#[test]
fn file_names_from_config() {
    let temp = Project::empty();
    temp.config("[files]\nrequired = \"expected.txt\"\nexcludes = \"forbidden.txt\"\n");
    temp.file("expected.txt", "done\n");
    temp.file("forbidden.txt", "panic\n");
    temp.file("build.log", "panic!\ndone\n");

    outmatch_cmd()
        .args(["check", "build.log"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("1: panic!  [panic]"));
}
