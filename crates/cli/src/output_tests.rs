#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn error_plain_text_when_not_terminal() {
    let mut buf = Vec::new();
    write_error(&mut buf, "input file missing", false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "Error: input file missing\n");
}

#[test]
fn error_with_ansi_when_terminal() {
    let mut buf = Vec::new();
    write_error(&mut buf, "input file missing", true);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "\x1b[31mError: input file missing\x1b[0m\n");
}

#[test]
fn warning_plain_text_when_not_terminal() {
    let mut buf = Vec::new();
    write_warning(&mut buf, "solver output truncated", false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "Warning: solver output truncated\n");
}

#[test]
fn warning_with_ansi_when_terminal() {
    let mut buf = Vec::new();
    write_warning(&mut buf, "solver output truncated", true);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "\x1b[33mWarning: solver output truncated\x1b[0m\n");
}

#[test]
fn error_with_format_args() {
    let mut buf = Vec::new();
    write_error(&mut buf, format_args!("exit code {}", 137), false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "Error: exit code 137\n");
}
