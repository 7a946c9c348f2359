// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite configuration types for TOML/JSON suite files.

use serde::{Deserialize, Serialize};

/// Default iteration count requested from the solver
pub const DEFAULT_ITERATIONS: u32 = 100;
/// Default relative tolerance applied per compared value (1%)
pub const DEFAULT_TOLERANCE: f64 = 0.01;
/// Default solver executable launched under mpirun
pub const DEFAULT_SOLVER: &str = "chem";
/// Default parallel-launch executable
pub const DEFAULT_MPIRUN: &str = "mpirun";

fn default_run_directory() -> String {
    ".".to_string()
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_processors() -> u32 {
    1
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_solver() -> String {
    DEFAULT_SOLVER.to_string()
}

/// Top-level suite configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Name for logging/debugging
    #[serde(default)]
    pub name: String,

    /// Regression cases, run in the order listed
    #[serde(default)]
    pub cases: Vec<CaseConfig>,
}

/// One regression case
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CaseConfig {
    /// Case name; also the base name of the input file (`<name>.vars`)
    pub name: String,

    /// Directory holding the case inputs, relative to the invocation directory
    #[serde(default = "default_run_directory")]
    pub run_directory: String,

    /// Simulation steps to request
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Processor count; clamped to the CLI core cap
    #[serde(default = "default_processors")]
    pub processors: u32,

    /// Relative tolerance per compared value
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Checkpoint file to restart from
    #[serde(default)]
    pub restart_file: Option<String>,

    /// Solver executable (default: "chem")
    #[serde(default = "default_solver")]
    pub solver: String,

    /// Truth-data checks against solver output files
    #[serde(default)]
    pub checks: Vec<CheckConfig>,
}

/// Expected values at fixed columns of one output file's last line
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Output file path, relative to the case run directory
    pub file: String,

    /// Zero-based column indices on the last line
    pub columns: Vec<usize>,

    /// Truth values, one per column
    pub values: Vec<f64>,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
