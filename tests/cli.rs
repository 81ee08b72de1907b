mod common;

use common::TempScript;
use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::{Command, Stdio};

fn get_ruso_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ruso"))
}

#[test]
fn test_version_flag() {
    let output = get_ruso_binary()
        .arg("--version")
        .output()
        .expect("Failed to execute ruso");

    assert!(output.status.success(), "Version flag should succeed");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("ruso"), "Version output should contain 'ruso'");
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "Version output should contain version number");
}

#[test]
fn test_no_script_argument() {
    let output = get_ruso_binary()
        .output()
        .expect("Failed to execute ruso");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "Error: No input file specified.\n");
}

#[test]
fn test_missing_script_file() {
    let path = std::env::temp_dir().join("ruso_test_does_not_exist.ruso");

    let output = get_ruso_binary()
        .arg(&path)
        .output()
        .expect("Failed to execute ruso");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("Error: Failed to open file '{}'.\n", path.display()));
}

#[test]
fn test_runs_script_lines_in_order() {
    let script = TempScript::new("order", "x=hi\nprint x\nprint 'a' 'b'\n").unwrap();

    let output = get_ruso_binary()
        .arg(script.path())
        .output()
        .expect("Failed to execute ruso");

    assert!(output.status.success(), "Script should run");
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "hi\nab\n");
}

#[test]
fn test_uncaught_fault_still_exits_zero() {
    let script = TempScript::new("fault", "print 'before'\nprint\nprint 'after'\n").unwrap();

    let output = get_ruso_binary()
        .arg("--color")
        .arg("never")
        .arg(script.path())
        .output()
        .expect("Failed to execute ruso");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "before\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error:"), "Fault should be reported on stderr");
    assert!(stderr.contains("(line 2)"), "Fault report should name the line");
}

#[test]
fn test_reads_input_from_stdin() {
    let script = TempScript::new("stdin", "name=input\nprint 'hello,' name\n").unwrap();

    let mut child = get_ruso_binary()
        .arg(script.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn ruso");

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(b"world\n").unwrap();
        stdin.flush().unwrap();
    }

    let output = child.wait_with_output().expect("Failed to read output");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "hello,world\n");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let script = TempScript::new("verbose", "if a then print 'x' end\nprint 'done'\n").unwrap();

    let output = get_ruso_binary()
        .arg("-v")
        .arg(script.path())
        .output()
        .expect("Failed to execute ruso");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "done\n");
    assert!(!output.stderr.is_empty(), "Verbose mode should log to stderr");
}

#[test]
fn test_completions_subcommand() {
    let output = get_ruso_binary()
        .arg("completions")
        .arg("bash")
        .output()
        .expect("Failed to execute ruso");

    assert!(output.status.success(), "Completions should succeed");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("ruso"), "Completions should mention the binary");
}
