//! Integration tests for the ricker binary.

use std::process::{Command, Output};

fn ricker_cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ricker"))
}

fn run(args: &[&str]) -> Output {
    ricker_cli().args(args).output().expect("Failed to run ricker")
}

fn value_on_line(stdout: &str, prefix: &str) -> f64 {
    let line = stdout
        .lines()
        .find(|l| l.starts_with(prefix))
        .unwrap_or_else(|| panic!("no line starting with {:?} in:\n{}", prefix, stdout));
    line.rsplit(": ").next().unwrap().trim().parse().unwrap()
}

#[test]
fn test_freq_mode() {
    let output = run(&["--freq", "30"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "ricker --freq failed: {}", stdout);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Input frequency (Hz): 30.000000");
    assert_eq!(lines[1], "Zero-crossing length L (s): 0.015005");
    assert_eq!(lines[2], "Half zero-crossing span (ms): 7.502636");
}

#[test]
fn test_length_mode() {
    let output = run(&["--length", "0.0150053"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "ricker --length failed: {}", stdout);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Input zero-crossing length L (s): 0.015005");
    assert!(lines[1].starts_with("Frequency (Hz)"));
    assert!(lines[2].starts_with("Half zero-crossing span (ms)"));
    let f = value_on_line(&stdout, "Frequency (Hz)");
    assert!((f - 30.0).abs() < 1e-3, "frequency {} not near 30", f);
}

#[test]
fn test_half_ms_mode() {
    let output = run(&["--half-ms", "5.62697"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "ricker --half-ms failed: {}", stdout);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Input half zero-crossing span (ms): 5.626970");
    assert!(lines[1].starts_with("Frequency (Hz)"));
    assert!(lines[2].starts_with("Zero-crossing length L (s)"));
    let f = value_on_line(&stdout, "Frequency (Hz)");
    assert!((f - 40.0).abs() < 1e-3);
}

#[test]
fn test_precision_option() {
    let output = run(&["--freq", "30", "--precision", "2"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Input frequency (Hz): 30.00\n"));
    assert!(stdout.contains("Zero-crossing length L (s): 0.02\n"));
    assert!(stdout.contains("Half zero-crossing span (ms): 7.50\n"));
}

#[test]
fn test_json_format() {
    let output = run(&["--freq", "30", "--format", "json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "json output failed: {}", stdout);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["input"], "frequency");
    assert_eq!(value["frequency_hz"], 30.0);
    assert_eq!(value["length_s"], 0.015005);
    assert_eq!(value["half_span_ms"], 7.502636);
}

#[test]
fn test_non_positive_input_is_usage_error() {
    for args in [
        ["--freq", "0"],
        ["--freq", "-1"],
        ["--length", "0"],
        ["--half-ms", "-2.5"],
    ] {
        let output = run(&args);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(output.status.code(), Some(2), "{:?} should fail: {}", args, stderr);
        assert!(stdout.is_empty(), "{:?} printed results: {}", args, stdout);
        assert!(stderr.contains("must be positive"), "stderr: {}", stderr);
        assert!(stderr.contains("Usage"), "stderr: {}", stderr);
    }
}

#[test]
fn test_out_of_range_input_names_the_supplied_quantity() {
    for (args, label) in [
        (["--length", "1e-310"], "Length values"),
        (["--length", "1e306"], "Length values"),
        (["--half-ms", "1e-320"], "Half-span values"),
        (["--freq", "1e308"], "Frequency values"),
    ] {
        let output = run(&args);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(output.status.code(), Some(2), "{:?} should fail: {}", args, stderr);
        assert!(stdout.is_empty(), "{:?} printed results: {}", args, stdout);
        assert!(stderr.contains(label), "{:?} stderr: {}", args, stderr);
        assert!(!stderr.contains("got inf"), "{:?} stderr: {}", args, stderr);
    }
}

#[test]
fn test_missing_input_is_usage_error() {
    let output = run(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_multiple_inputs_rejected() {
    let output = run(&["--freq", "30", "--length", "0.015"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("cannot be used with"), "stderr: {}", stderr);
}

#[test]
fn test_negative_precision_rejected() {
    let output = run(&["--freq", "30", "--precision", "-1"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let output = run(&["--freq", "30", "-vv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.lines().count(), 3);
}
