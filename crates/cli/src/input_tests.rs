// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use tempfile::TempDir;

fn make_case(iterations: u32) -> CaseSpec {
    let mut case = CaseSpec::new("doubleCone");
    case.set_iterations(iterations);
    case
}

fn write_vars(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("doubleCone.vars"), content).unwrap();
}

#[test]
fn test_rewrite_replaces_iteration_lines() {
    let dir = TempDir::new().unwrap();
    write_vars(&dir, "stop_iter: 10\nplot_freq: 5\nfoo: bar\n");

    rewrite_input_file(dir.path(), &make_case(200)).unwrap();

    let rewritten = fs::read_to_string(dir.path().join("doubleCone.vars")).unwrap();
    assert_eq!(rewritten, "stop_iter: 200\nplot_freq: 100\nfoo: bar\n");
}

#[test]
fn test_backup_preserves_original() {
    let dir = TempDir::new().unwrap();
    let original = "stop_iter: 10\nplot_freq: 5\nfoo: bar\n";
    write_vars(&dir, original);

    rewrite_input_file(dir.path(), &make_case(200)).unwrap();

    let backup = fs::read_to_string(dir.path().join("doubleCone.vars.old")).unwrap();
    assert_eq!(backup, original);
}

#[test]
fn test_restart_freq_gets_output_frequency() {
    let dir = TempDir::new().unwrap();
    write_vars(&dir, "restart_freq: 1000\nstop_iter: 1000\n");

    rewrite_input_file(dir.path(), &make_case(101)).unwrap();

    let rewritten = fs::read_to_string(dir.path().join("doubleCone.vars")).unwrap();
    assert_eq!(rewritten, "restart_freq: 50\nstop_iter: 101\n");
}

#[test]
fn test_unrecognized_lines_pass_through_in_order() {
    let dir = TempDir::new().unwrap();
    write_vars(
        &dir,
        "// two cone geometry\nboundary_conditions: <inflow=supersonicInflow()>\nstop_iter: 10\nplot_modulo: 0\n",
    );

    rewrite_input_file(dir.path(), &make_case(200)).unwrap();

    let rewritten = fs::read_to_string(dir.path().join("doubleCone.vars")).unwrap();
    assert_eq!(
        rewritten,
        "// two cone geometry\nboundary_conditions: <inflow=supersonicInflow()>\nstop_iter: 200\nplot_modulo: 0\n",
    );
}

#[test]
fn test_prefix_match_only() {
    // An indented or commented directive is not a directive.
    let dir = TempDir::new().unwrap();
    write_vars(&dir, "  stop_iter: 10\nstop_iter: 10\n");

    rewrite_input_file(dir.path(), &make_case(200)).unwrap();

    let rewritten = fs::read_to_string(dir.path().join("doubleCone.vars")).unwrap();
    assert_eq!(rewritten, "  stop_iter: 10\nstop_iter: 200\n");
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();

    let err = rewrite_input_file(dir.path(), &make_case(200)).unwrap_err();
    assert!(matches!(err, InputError::Missing { .. }));
}
