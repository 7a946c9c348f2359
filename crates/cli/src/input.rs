// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input-file rewrite for a configured case.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::case::CaseSpec;

/// Errors raised while rewriting a case input file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input file {path} is missing: {source}")]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to rewrite input file {path}: {source}")]
    Rewrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rewrite `<name>.vars` in `run_dir` with the case's iteration policy.
///
/// The original file is preserved as `<name>.vars.old`. Lines starting with
/// `stop_iter:` receive the iteration count; `plot_freq:` and `restart_freq:`
/// lines both receive the derived output frequency. Every other line is
/// echoed unchanged, in the original order.
pub fn rewrite_input_file(run_dir: &Path, case: &CaseSpec) -> Result<(), InputError> {
    let path = run_dir.join(format!("{}.vars", case.name()));
    let backup = run_dir.join(format!("{}.vars.old", case.name()));

    fs::rename(&path, &backup).map_err(|source| InputError::Missing {
        path: path.clone(),
        source,
    })?;

    rewrite_lines(&backup, &path, case.iterations(), case.output_frequency())
        .map_err(|source| InputError::Rewrite { path, source })
}

fn rewrite_lines(
    backup: &Path,
    path: &Path,
    iterations: u32,
    output_freq: u32,
) -> std::io::Result<()> {
    let reader = BufReader::new(File::open(backup)?);
    let mut writer = BufWriter::new(File::create(path)?);

    for line in reader.lines() {
        let line = line?;
        if line.starts_with("stop_iter:") {
            writeln!(writer, "stop_iter: {}", iterations)?;
        } else if line.starts_with("plot_freq:") {
            writeln!(writer, "plot_freq: {}", output_freq)?;
        } else if line.starts_with("restart_freq:") {
            writeln!(writer, "restart_freq: {}", output_freq)?;
        } else {
            writeln!(writer, "{}", line)?;
        }
    }

    writer.flush()
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
