use std::path::PathBuf;
use std::process::{Command, Output};

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_cantor"))
}

fn run_cantor(args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .output()
        .expect("Failed to execute cantor")
}

fn assert_success(output: &Output) -> String {
    if !output.status.success() {
        panic!(
            "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
    }
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_equal_different_functions() {
    let stdout = assert_success(&run_cantor(&["equal", "--lhs", "f", "--rhs", "g"]));
    assert!(
        stdout.contains("Equal(f, g) = false"),
        "f and g should differ, got: {}",
        stdout
    );
}

#[test]
fn test_equal_same_function() {
    let stdout = assert_success(&run_cantor(&["equal", "--lhs", "f", "--rhs", "F"]));
    assert!(stdout.contains("Equal(f, F) = true"), "got: {}", stdout);
}

#[test]
fn test_equal_with_validation() {
    let stdout = assert_success(&run_cantor(&[
        "equal", "--lhs", "f", "--rhs", "g", "--validate", "--seed", "42",
    ]));
    assert!(stdout.contains("Sampled counter-example:"), "got: {}", stdout);
    assert!(stdout.contains("Equal(f, g) = false"));
}

#[test]
fn test_demo_reproduces_driver_output() {
    let stdout = assert_success(&run_cantor(&["demo"]));
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        &lines[..6],
        &[
            "Equal(F, F) = true",
            "Equal(G, G) = true",
            "Equal(F, G) = false",
            "Equal(G, F) = false",
            "Modulus(F) = 8",
            "Modulus(G) = 13",
        ],
        "got: {}",
        stdout
    );
    assert!(lines[6].starts_with("Time taken in demo: "), "got: {}", stdout);
}

#[test]
fn test_modulus_f() {
    let stdout = assert_success(&run_cantor(&["modulus", "--function", "f"]));
    assert!(stdout.contains("Modulus(f) = 8"), "got: {}", stdout);
}

#[test]
fn test_modulus_single_schedule() {
    let stdout = assert_success(&run_cantor(&[
        "modulus",
        "--function",
        "parity",
        "--schedule",
        "single",
    ]));
    assert!(stdout.contains("Modulus(parity) = 4"), "got: {}", stdout);
}

#[test]
fn test_modulus_limit_reported() {
    let output = run_cantor(&["modulus", "--function", "f", "--max-modulus", "3"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "got: {}", stderr);
    assert!(stderr.contains('3'), "got: {}", stderr);
}

#[test]
fn test_exists_prints_witness() {
    let stdout = assert_success(&run_cantor(&["exists", "--function", "f"]));
    assert!(stdout.contains("Exists(f) = true"), "got: {}", stdout);
    assert!(stdout.contains("Witness: "), "got: {}", stdout);
}

#[test]
fn test_exists_unsatisfiable() {
    let stdout = assert_success(&run_cantor(&["exists", "--function", "false"]));
    assert!(stdout.contains("Exists(false) = false"), "got: {}", stdout);
    assert!(!stdout.contains("Witness:"));
}

#[test]
fn test_exists_negated() {
    let stdout = assert_success(&run_cantor(&["exists", "--function", "true", "--negated"]));
    assert!(stdout.contains("Exists(not true) = false"), "got: {}", stdout);
}

#[test]
fn test_for_all() {
    let stdout = assert_success(&run_cantor(&["for-all", "--function", "true"]));
    assert!(stdout.contains("ForAll(true) = true"), "got: {}", stdout);

    let stdout = assert_success(&run_cantor(&["for-all", "--function", "majority"]));
    assert!(stdout.contains("ForAll(majority) = false"), "got: {}", stdout);
}

#[test]
fn test_stats_summary() {
    let stdout = assert_success(&run_cantor(&["exists", "--function", "parity", "--stats"]));
    assert!(stdout.contains("Search Statistics:"), "got: {}", stdout);
}

#[test]
fn test_list_samples() {
    let stdout = assert_success(&run_cantor(&["list"]));
    for name in ["f", "g", "majority", "parity"] {
        assert!(stdout.lines().any(|line| line == name), "missing {}", name);
    }
}

#[test]
fn test_unknown_function() {
    let output = run_cantor(&["equal", "--lhs", "f", "--rhs", "nope"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope"), "got: {}", stderr);
}

#[test]
fn test_nested_search_aborts() {
    let output = run_cantor(&["nested"]);
    assert!(!output.status.success(), "nested search must not succeed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Multiple active searches on the same thread!"),
        "got: {}",
        stderr
    );
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Nested search returned"));
}
