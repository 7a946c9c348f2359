// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tolerance comparison and case classification.

use serde::{Deserialize, Serialize};

/// Final classification of one regression case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// No run has completed yet.
    NotRun,
    /// Clean exit, every compared value within tolerance.
    Passed,
    /// Clean exit, at least one compared value out of tolerance.
    Mismatch,
    /// The run itself failed: nonzero exit, launch failure, or unreadable output.
    Errors,
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CaseStatus::NotRun => "NONE",
            CaseStatus::Passed => "PASSED",
            CaseStatus::Mismatch => "MISMATCH",
            CaseStatus::Errors => "ERRORS",
        };
        f.write_str(label)
    }
}

/// Verdict for a single compared value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValueCheck {
    /// Output file the value came from.
    pub file: String,

    /// Zero-based column on the file's last line.
    pub column: usize,

    /// Truth value the simulation is expected to reproduce.
    pub expected: f64,

    /// Extracted value; `None` when the run failed before extraction.
    pub actual: Option<f64>,

    /// Whether the value was within tolerance.
    pub passed: bool,
}

/// Relative-tolerance acceptance test.
///
/// The allowed deviation scales with the truth value, not the extracted one,
/// and the boundary is inclusive: a deviation of exactly
/// `tolerance * |expected|` passes.
pub fn within_tolerance(expected: f64, actual: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance * expected.abs()
}

/// Compare extracted values against truth data, one verdict per column.
///
/// Every value is evaluated; comparison never short-circuits on the first
/// failure.
pub fn compare_columns(
    file: &str,
    columns: &[usize],
    expected: &[f64],
    actual: &[f64],
    tolerance: f64,
) -> Vec<ValueCheck> {
    columns
        .iter()
        .zip(expected.iter().zip(actual))
        .map(|(&column, (&expected, &actual))| ValueCheck {
            file: file.to_string(),
            column,
            expected,
            actual: Some(actual),
            passed: within_tolerance(expected, actual, tolerance),
        })
        .collect()
}

/// Mark every expected value as failed without consulting any output file.
///
/// Used when the solver exits nonzero or the run never reaches extraction.
pub fn failed_checks(file: &str, columns: &[usize], expected: &[f64]) -> Vec<ValueCheck> {
    columns
        .iter()
        .zip(expected)
        .map(|(&column, &expected)| ValueCheck {
            file: file.to_string(),
            column,
            expected,
            actual: None,
            passed: false,
        })
        .collect()
}

/// Classify a completed run from its exit status and per-value verdicts.
pub fn classify(exit_ok: bool, checks: &[ValueCheck]) -> CaseStatus {
    if !exit_ok {
        CaseStatus::Errors
    } else if checks.iter().all(|c| c.passed) {
        CaseStatus::Passed
    } else {
        CaseStatus::Mismatch
    }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
