// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::config::CheckConfig;
use chemreg_compare::CaseStatus;
use rstest::rstest;

#[test]
fn test_defaults() {
    let spec = CaseSpec::new("doubleCone");
    assert_eq!(spec.name(), "doubleCone");
    assert_eq!(spec.iterations(), 100);
    assert_eq!(spec.output_frequency(), 50);
    assert_eq!(spec.processors(), 1);
    assert_eq!(spec.run_directory(), Path::new("."));
    assert_eq!(spec.tolerance(), 0.01);
    assert_eq!(spec.mpirun_path(), "mpirun");
    assert_eq!(spec.solver_path(), "chem");
    assert!(!spec.is_restart());
    assert_eq!(spec.status(), CaseStatus::NotRun);
}

#[rstest]
#[case(200, 100)]
#[case(101, 50)]
#[case(100, 50)]
#[case(1, 0)]
fn test_iterations_derive_output_frequency(#[case] iterations: u32, #[case] freq: u32) {
    let mut spec = CaseSpec::new("doubleCone");
    spec.set_iterations(iterations);
    assert_eq!(spec.iterations(), iterations);
    assert_eq!(spec.output_frequency(), freq);
}

#[test]
fn test_frequency_rederived_on_each_set() {
    let mut spec = CaseSpec::new("doubleCone");
    spec.set_iterations(200);
    assert_eq!(spec.output_frequency(), 100);
    spec.set_iterations(50);
    assert_eq!(spec.output_frequency(), 25);
}

#[test]
fn test_restart_setter() {
    let mut spec = CaseSpec::new("doubleCone");
    spec.set_restart_file("restart/save.200");
    assert!(spec.is_restart());
    assert_eq!(spec.restart_file(), Some("restart/save.200"));
}

#[test]
fn test_from_config_clamps_processors_to_core_cap() {
    let config = CaseConfig {
        name: "doubleCone".to_string(),
        run_directory: "double_cone".to_string(),
        iterations: 200,
        processors: 32,
        tolerance: 0.05,
        restart_file: None,
        solver: "chem".to_string(),
        checks: vec![CheckConfig {
            file: "output/resid.dat".to_string(),
            columns: vec![1],
            values: vec![748.6393634],
        }],
    };

    let spec = CaseSpec::from_config(&config, "/opt/mpi/bin/mpirun", 8);
    assert_eq!(spec.processors(), 8);
    assert_eq!(spec.iterations(), 200);
    assert_eq!(spec.output_frequency(), 100);
    assert_eq!(spec.mpirun_path(), "/opt/mpi/bin/mpirun");
    assert_eq!(spec.tolerance(), 0.05);
    assert_eq!(spec.checks().len(), 1);
    assert_eq!(spec.checks()[0].columns, vec![1]);
}

#[test]
fn test_from_config_keeps_counts_below_cap() {
    let config = CaseConfig {
        name: "flatPlate".to_string(),
        run_directory: ".".to_string(),
        iterations: 100,
        processors: 2,
        tolerance: 0.01,
        restart_file: None,
        solver: "chem".to_string(),
        checks: vec![],
    };

    let spec = CaseSpec::from_config(&config, "mpirun", 16);
    assert_eq!(spec.processors(), 2);
}
