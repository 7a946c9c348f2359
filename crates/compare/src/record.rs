// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-case result records.

use crate::duration_serde;
use crate::verdict::{CaseStatus, ValueCheck};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// Result record for one completed regression case.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Sequence number within the suite run.
    pub seq: u64,

    /// Wall-clock completion time.
    pub timestamp: SystemTime,

    /// Time spent on the case, launch through classification.
    #[serde(with = "duration_serde")]
    pub duration: Duration,

    /// Case name.
    pub case: String,

    /// Final classification.
    pub status: CaseStatus,

    /// Rendered launch command.
    pub command: String,

    /// Child exit code; `None` when the run failed before one was recorded.
    pub exit_code: Option<i32>,

    /// Per-value verdicts.
    pub checks: Vec<ValueCheck>,
}
