// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-case descriptor consumed by the runner.

use std::path::{Path, PathBuf};

use chemreg_compare::CaseStatus;

use crate::config::{CaseConfig, DEFAULT_ITERATIONS, DEFAULT_MPIRUN, DEFAULT_SOLVER, DEFAULT_TOLERANCE};

/// Truth data for one output file: expected values at fixed columns.
#[derive(Clone, Debug)]
pub struct TruthCheck {
    /// Output file path, relative to the case run directory.
    pub file: String,
    /// Zero-based column indices on the file's last line.
    pub columns: Vec<usize>,
    /// Truth values, one per column.
    pub values: Vec<f64>,
}

/// Description of one regression case.
///
/// Configured through setters, then handed to the runner for one full
/// lifecycle. The runner writes back only `status`.
#[derive(Clone, Debug)]
pub struct CaseSpec {
    name: String,
    iterations: u32,
    output_freq: u32,
    processors: u32,
    run_directory: PathBuf,
    restart_file: Option<String>,
    checks: Vec<TruthCheck>,
    tolerance: f64,
    mpirun_path: String,
    solver_path: String,
    status: CaseStatus,
}

impl CaseSpec {
    /// Create a descriptor with default policy: 100 iterations, output every
    /// 50, one processor, 1% tolerance, fresh (non-restart) run.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iterations: DEFAULT_ITERATIONS,
            output_freq: DEFAULT_ITERATIONS / 2,
            processors: 1,
            run_directory: PathBuf::from("."),
            restart_file: None,
            checks: Vec::new(),
            tolerance: DEFAULT_TOLERANCE,
            mpirun_path: DEFAULT_MPIRUN.to_string(),
            solver_path: DEFAULT_SOLVER.to_string(),
            status: CaseStatus::NotRun,
        }
    }

    /// Build a descriptor from a declarative case entry.
    ///
    /// The configured processor count is clamped to `core_cap`, and the
    /// parallel-launch path comes from the CLI.
    pub fn from_config(config: &CaseConfig, mpirun_path: &str, core_cap: u32) -> Self {
        let mut spec = Self::new(&config.name);
        spec.set_iterations(config.iterations);
        spec.set_processors(config.processors.min(core_cap));
        spec.set_run_directory(&config.run_directory);
        spec.set_tolerance(config.tolerance);
        spec.set_mpirun_path(mpirun_path);
        spec.set_solver_path(&config.solver);
        if let Some(ref restart) = config.restart_file {
            spec.set_restart_file(restart);
        }
        spec.set_checks(
            config
                .checks
                .iter()
                .map(|c| TruthCheck {
                    file: c.file.clone(),
                    columns: c.columns.clone(),
                    values: c.values.clone(),
                })
                .collect(),
        );
        spec
    }

    /// Set the iteration count. The output frequency is re-derived as half
    /// of it (integer floor).
    pub fn set_iterations(&mut self, iterations: u32) {
        self.iterations = iterations;
        self.output_freq = iterations / 2;
    }

    pub fn set_processors(&mut self, processors: u32) {
        self.processors = processors;
    }

    pub fn set_run_directory(&mut self, dir: impl Into<PathBuf>) {
        self.run_directory = dir.into();
    }

    pub fn set_restart_file(&mut self, file: impl Into<String>) {
        self.restart_file = Some(file.into());
    }

    pub fn set_checks(&mut self, checks: Vec<TruthCheck>) {
        self.checks = checks;
    }

    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.tolerance = tolerance;
    }

    pub fn set_mpirun_path(&mut self, path: impl Into<String>) {
        self.mpirun_path = path.into();
    }

    pub fn set_solver_path(&mut self, path: impl Into<String>) {
        self.solver_path = path.into();
    }

    pub(crate) fn set_status(&mut self, status: CaseStatus) {
        self.status = status;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// How often (in iterations) the solver writes plot/restart data.
    pub fn output_frequency(&self) -> u32 {
        self.output_freq
    }

    pub fn processors(&self) -> u32 {
        self.processors
    }

    pub fn run_directory(&self) -> &Path {
        &self.run_directory
    }

    pub fn restart_file(&self) -> Option<&str> {
        self.restart_file.as_deref()
    }

    pub fn is_restart(&self) -> bool {
        self.restart_file.is_some()
    }

    pub fn checks(&self) -> &[TruthCheck] {
        &self.checks
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn mpirun_path(&self) -> &str {
        &self.mpirun_path
    }

    pub fn solver_path(&self) -> &str {
        &self.solver_path
    }

    pub fn status(&self) -> CaseStatus {
        self.status
    }
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
