//! CLI smoke tests
//!
//! Run the built `emojify` binary for each subcommand, covering bad input
//! and missing fonts as well as the happy path. Rendering tests skip when
//! the machine has no fonts installed.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn emojify() -> Command {
    Command::new(env!("CARGO_BIN_EXE_emojify"))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = emojify()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn emojify");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("emojify_cli_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn no_fonts(output: &Output) -> bool {
    !output.status.success() && stderr(output).contains("Font database is empty")
}

// ============================================================================
// Help and presets
// ============================================================================

#[test]
fn test_help_lists_subcommands() {
    let output = emojify().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["render", "batch", "presets", "fonts"] {
        assert!(stdout.contains(command), "help should mention {command}");
    }
}

#[test]
fn test_presets_lists_all_seven() {
    let output = emojify().arg("presets").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 7);
    assert!(stdout.contains("neon-glow"));
    assert!(stdout.contains("dark-mode"));
}

#[test]
fn test_preset_prints_style_json() {
    let output = emojify().args(["presets", "kawaii-pink"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json.get("backgroundColor").is_some());
    assert!(json.get("highlightEnabled").is_some());
}

#[test]
fn test_unknown_preset_fails() {
    let output = emojify().args(["presets", "nope"]).output().unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown preset"));
}

// ============================================================================
// Failure cases
// ============================================================================

#[test]
fn test_batch_rejects_empty_input() {
    let output = run_with_stdin(&["batch", "--no-system-fonts"], "   \n");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("No text was entered"));
}

#[test]
fn test_batch_reports_line_numbers() {
    let output = run_with_stdin(&["batch", "--csv", "--no-system-fonts"], "ok,fine\nbroken");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Line 2"));
}

#[test]
fn test_render_without_fonts_fails() {
    let dir = temp_dir("nofonts");
    let output = emojify()
        .args(["render", "草", "--no-system-fonts", "-o"])
        .arg(&dir)
        .output()
        .unwrap();
    assert!(no_fonts(&output), "stderr: {}", stderr(&output));
    assert!(!dir.join("emoji1.png").exists());
}

#[test]
fn test_missing_font_file_fails() {
    let output = emojify()
        .args(["render", "A", "--no-system-fonts", "--font-file", "/no/such/font.ttf"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("/no/such/font.ttf"));
}

#[test]
fn test_bad_color_is_a_usage_error() {
    let output = emojify()
        .args(["render", "A", "--background", "#zzz"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid color"));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_writes_png() {
    let dir = temp_dir("render");
    let output = emojify()
        .args(["render", "草,kusa", "--shape", "square", "-o"])
        .arg(&dir)
        .output()
        .unwrap();
    if no_fonts(&output) {
        return;
    }
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let png = fs::read(dir.join("kusa.png")).unwrap();
    assert_eq!(&png[1..4], b"PNG");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_render_reads_first_line_of_stdin() {
    let dir = temp_dir("stdin");
    let out = dir.to_string_lossy().into_owned();
    let output = run_with_stdin(&["render", "-n", "piped", "-o", &out], "OK,ignored\nsecond");
    if no_fonts(&output) {
        return;
    }
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(dir.join("piped.png").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_batch_writes_every_line() {
    let dir = temp_dir("batch");
    let out = dir.to_string_lossy().into_owned();
    let output = run_with_stdin(&["batch", "-o", &out, "--layout", "grid"], "abcd,grid\nOK\n草");
    if no_fonts(&output) {
        return;
    }
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    for name in ["grid.png", "ok.png", "emoji3.png"] {
        assert!(dir.join(name).exists(), "{name} missing");
    }
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 3);
    fs::remove_dir_all(&dir).unwrap();
}
