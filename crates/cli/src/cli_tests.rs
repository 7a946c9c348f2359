// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["chemreg"]).unwrap();
    assert_eq!(cli.mpirun_path, "mpirun");
    assert_eq!(cli.num_cores, 1);
    assert!(cli.suite.is_none());
    assert!(cli.report.is_none());
}

#[test]
fn test_long_flags() {
    let cli = Cli::try_parse_from([
        "chemreg",
        "--mpirunPath",
        "/opt/mpi/bin/mpirun",
        "--numCores",
        "16",
    ])
    .unwrap();
    assert_eq!(cli.mpirun_path, "/opt/mpi/bin/mpirun");
    assert_eq!(cli.num_cores, 16);
}

#[test]
fn test_short_flags() {
    let cli = Cli::try_parse_from(["chemreg", "-m", "mpiexec", "-n", "4"]).unwrap();
    assert_eq!(cli.mpirun_path, "mpiexec");
    assert_eq!(cli.num_cores, 4);
}

#[test]
fn test_zero_cores_rejected() {
    let result = Cli::try_parse_from(["chemreg", "--numCores", "0"]);
    assert!(result.is_err());
}

#[test]
fn test_suite_and_report_flags() {
    let cli = Cli::try_parse_from([
        "chemreg",
        "--suite",
        "suite.toml",
        "--report",
        "report.jsonl",
    ])
    .unwrap();
    assert_eq!(cli.suite.as_deref(), Some("suite.toml"));
    assert_eq!(cli.report.as_deref(), Some("report.jsonl"));
}
