// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regression suite runner for the CHEM flow solver.
//!
//! Launches solver cases under a process-parallel runtime (`mpirun`),
//! supervises each run with periodic progress output, extracts numbers from
//! the solver's output files, and classifies every case PASSED / MISMATCH /
//! ERRORS against truth data within a relative tolerance.

pub mod case;
pub mod cli;
pub mod config;
pub mod input;
pub mod output;
pub mod runner;
pub mod suite;

/// Re-exported verdict and report types from the chemreg-compare crate.
pub mod compare {
    pub use chemreg_compare::{
        classify, compare_columns, failed_checks, read_last_line_values, within_tolerance,
        CaseRecord, CaseStatus, ExtractError, ReportLog, ValueCheck,
    };
}
