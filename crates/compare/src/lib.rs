// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output extraction and tolerance verdicts for chemreg regression runs.
//!
//! This crate provides the numeric side of the harness: pulling values out of
//! solver output files, checking them against truth data within a relative
//! tolerance, and recording per-case results to a JSONL report log.

mod duration_serde;
mod extract;
mod log;
mod record;
mod verdict;

pub use extract::{read_last_line_values, ExtractError};
pub use log::ReportLog;
pub use record::CaseRecord;
pub use verdict::{
    classify, compare_columns, failed_checks, within_tolerance, CaseStatus, ValueCheck,
};
