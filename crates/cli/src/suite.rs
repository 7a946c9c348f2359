// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite loading, validation, and sequential execution.

use std::path::Path;

use thiserror::Error;

use crate::case::{CaseSpec, TruthCheck};
use crate::config::{CaseConfig, SuiteConfig};
use crate::runner::CaseRunner;

/// Errors that can occur when loading a suite definition.
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("failed to read suite file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// An ordered list of configured regression cases.
#[derive(Debug)]
pub struct Suite {
    name: String,
    cases: Vec<CaseSpec>,
}

impl Suite {
    /// Load a suite definition from a TOML or JSON file.
    pub fn load(path: &Path, mpirun_path: &str, core_cap: u32) -> Result<Self, SuiteError> {
        let content = std::fs::read_to_string(path)?;
        let config: SuiteConfig = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        Self::from_config(config, mpirun_path, core_cap)
    }

    /// Build a suite from a config object.
    pub fn from_config(
        config: SuiteConfig,
        mpirun_path: &str,
        core_cap: u32,
    ) -> Result<Self, SuiteError> {
        if config.cases.is_empty() {
            return Err(SuiteError::Validation(
                "suite defines no cases".to_string(),
            ));
        }
        for case in &config.cases {
            validate_case(case)?;
        }

        let cases = config
            .cases
            .iter()
            .map(|c| CaseSpec::from_config(c, mpirun_path, core_cap))
            .collect();
        Ok(Self {
            name: config.name,
            cases,
        })
    }

    /// The built-in statically enumerated suite.
    ///
    /// One case: the double-cone nonreacting-nitrogen benchmark with plasma
    /// transport properties, checked against residual histories and a wall
    /// probe.
    pub fn builtin(mpirun_path: &str, core_cap: u32) -> Self {
        let mut double_cone = CaseSpec::new("doubleCone");
        double_cone.set_run_directory("double_cone");
        double_cone.set_processors(core_cap);
        double_cone.set_iterations(200);
        double_cone.set_checks(vec![
            TruthCheck {
                file: "output/resid.dat".to_string(),
                columns: vec![1, 2, 3],
                values: vec![748.6393634, 4263865966.0, 897653.7495],
            },
            TruthCheck {
                file: "output/ev_resid.dat".to_string(),
                columns: vec![1],
                values: vec![55127312.79],
            },
            TruthCheck {
                file: "wprobe1.dat".to_string(),
                columns: vec![2, 4],
                values: vec![724.47075048611, 331466.80923554],
            },
        ]);
        double_cone.set_mpirun_path(mpirun_path);

        Self {
            name: "builtin".to_string(),
            cases: vec![double_cone],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cases(&self) -> &[CaseSpec] {
        &self.cases
    }

    /// Run every case in order and aggregate the per-value verdicts.
    ///
    /// A failing case never stops the suite; the final table and exit code
    /// always cover every case.
    pub async fn run(&mut self, runner: &CaseRunner) -> SuiteOutcome {
        let mut all_passed = true;
        for case in &mut self.cases {
            let outcome = runner.run_case(case).await;
            all_passed = all_passed && outcome.all_passed();
        }

        if all_passed {
            println!("All tests passed!");
        } else {
            println!("ERROR: Some tests failed");
        }
        println!("--------------------------------------------------");
        for case in &self.cases {
            println!("{}: {}", case.name(), case.status());
        }

        SuiteOutcome { all_passed }
    }
}

/// Final result of a suite run.
#[derive(Clone, Copy, Debug)]
pub struct SuiteOutcome {
    /// True when every value in every case passed.
    pub all_passed: bool,
}

impl SuiteOutcome {
    /// Process exit code: 0 when everything passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed {
            0
        } else {
            1
        }
    }
}

fn validate_case(case: &CaseConfig) -> Result<(), SuiteError> {
    if case.name.is_empty() {
        return Err(SuiteError::Validation("case name must not be empty".to_string()));
    }
    if case.iterations == 0 {
        return Err(SuiteError::Validation(format!(
            "case '{}': iterations must be at least 1",
            case.name
        )));
    }
    if case.processors == 0 {
        return Err(SuiteError::Validation(format!(
            "case '{}': processors must be at least 1",
            case.name
        )));
    }
    if !case.tolerance.is_finite() || case.tolerance <= 0.0 {
        return Err(SuiteError::Validation(format!(
            "case '{}': tolerance must be a positive number",
            case.name
        )));
    }
    for check in &case.checks {
        if check.columns.len() != check.values.len() {
            return Err(SuiteError::Validation(format!(
                "case '{}', file '{}': {} columns but {} values",
                case.name,
                check.file,
                check.columns.len(),
                check.values.len()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
