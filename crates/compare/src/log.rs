// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report log implementation.

use crate::record::CaseRecord;
use crate::verdict::{CaseStatus, ValueCheck};
use parking_lot::Mutex;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Report log collecting one record per completed case.
///
/// Records are always kept in memory; when a file sink is configured, each
/// record is additionally appended to it as one JSON line.
#[derive(Clone)]
pub struct ReportLog {
    records: Arc<Mutex<Vec<CaseRecord>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl ReportLog {
    /// Create a new in-memory report log.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a report log that also writes to a file (JSONL format).
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record a completed case.
    pub fn record(
        &self,
        case: &str,
        status: CaseStatus,
        command: &str,
        exit_code: Option<i32>,
        checks: Vec<ValueCheck>,
        duration: Duration,
    ) {
        let mut records = self.records.lock();
        let seq = records.len() as u64;
        let record = CaseRecord {
            seq,
            timestamp: SystemTime::now(),
            duration,
            case: case.to_string(),
            status,
            command: command.to_string(),
            exit_code,
            checks,
        };

        records.push(record.clone());

        // Write to file if configured
        if let Some(ref writer) = self.file_writer {
            use std::io::Write;
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&record) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }
    }

    /// Get all recorded cases.
    pub fn records(&self) -> Vec<CaseRecord> {
        self.records.lock().clone()
    }

    /// Get the last N records.
    pub fn last(&self, n: usize) -> Vec<CaseRecord> {
        let all = self.records.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    /// Count records matching a predicate.
    pub fn count<F: Fn(&CaseRecord) -> bool>(&self, pred: F) -> usize {
        self.records.lock().iter().filter(|r| pred(r)).count()
    }

    /// Find records for a case by name.
    pub fn find_by_case(&self, name: &str) -> Vec<CaseRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.case == name)
            .cloned()
            .collect()
    }

    /// Find records for cases that did not pass.
    pub fn find_failures(&self) -> Vec<CaseRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.status != CaseStatus::Passed)
            .cloned()
            .collect()
    }

    /// Drop all in-memory records. The file sink, if any, is left untouched.
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Get the total number of records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Check if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Default for ReportLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
