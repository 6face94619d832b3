//! Integration tests for screenhop CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.
//! These tests run the real binary; on macOS it will move the pointer.

use std::process::Command;

/// Execute 'screenhop' with the given arguments and verify it exits 0
fn run_screenhop(args: &[&str]) -> std::process::Output {
    let output = Command::new(env!("CARGO_BIN_EXE_screenhop"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute 'screenhop'");

    assert!(
        output.status.success(),
        "screenhop {:?} failed with exit code {:?}. stderr: {}",
        args,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    output
}

// =============================================================================
// Default Mode (Quiet) Behavioral Tests
// =============================================================================

/// Verify that default mode (no flags) suppresses INFO and WARN logs
#[test]
fn test_default_mode_suppresses_info_logs() {
    let output = run_screenhop(&[]);

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should suppress INFO logs, but stderr contains: {}",
        stderr
    );
    assert!(
        !stderr.contains(r#""level":"DEBUG""#),
        "Default mode should suppress DEBUG logs, but stderr contains: {}",
        stderr
    );
    assert!(
        !stderr.contains(r#""level":"WARN""#),
        "Default mode should suppress WARN logs, but stderr contains: {}",
        stderr
    );
}

/// Verify that stdout stays empty: the tool has no user-facing output
#[test]
fn test_stdout_is_clean() {
    let output = run_screenhop(&[]);

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.trim().is_empty(),
        "stdout should be empty, got: {}",
        stdout
    );
}

// =============================================================================
// Verbose Mode Behavioral Tests
// =============================================================================

/// Verify verbose mode (-v) emits INFO logs on stderr
#[test]
fn test_verbose_flag_emits_info_logs() {
    let output = run_screenhop(&["-v"]);

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains(r#""level":"INFO""#),
        "Verbose mode should emit INFO logs, but stderr is: {}",
        stderr
    );
    assert!(
        stderr.contains("core.app.startup_completed"),
        "Verbose mode should log startup, but stderr is: {}",
        stderr
    );
}

/// Verify verbose mode works with --verbose long form
#[test]
fn test_verbose_flag_long_form_emits_logs() {
    let output = run_screenhop(&["--verbose"]);

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains(r#""level":"INFO""#),
        "--verbose long form should emit INFO logs, but stderr is: {}",
        stderr
    );
}

/// Verify the switch reports how it ended, even when nothing could be done
#[test]
fn test_verbose_run_logs_shutdown() {
    let output = run_screenhop(&["-v"]);

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains("core.app.shutdown_started"),
        "Run should always reach shutdown, but stderr is: {}",
        stderr
    );
}
