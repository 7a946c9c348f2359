// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric extraction from solver output files.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while pulling values out of an output file.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read output file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output file {path} is empty")]
    EmptyFile { path: PathBuf },

    #[error("last line of {path} has {count} columns, wanted column {column}")]
    ColumnOutOfRange {
        path: PathBuf,
        column: usize,
        count: usize,
    },

    #[error("column {column} of {path} is not numeric: '{token}'")]
    Parse {
        path: PathBuf,
        column: usize,
        token: String,
    },
}

/// Read the values at `columns` (zero-based) from the last line of `path`.
///
/// Solver output files are flat whitespace-delimited tables where the most
/// recent entry is the last line. Tokens are selected by column index and
/// parsed as `f64`, in the order the columns are given.
pub fn read_last_line_values(path: &Path, columns: &[usize]) -> Result<Vec<f64>, ExtractError> {
    let content = fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let last = content.lines().last().ok_or_else(|| ExtractError::EmptyFile {
        path: path.to_path_buf(),
    })?;
    let tokens: Vec<&str> = last.split_whitespace().collect();

    columns
        .iter()
        .map(|&column| {
            let token = tokens
                .get(column)
                .ok_or_else(|| ExtractError::ColumnOutOfRange {
                    path: path.to_path_buf(),
                    column,
                    count: tokens.len(),
                })?;
            token.parse::<f64>().map_err(|_| ExtractError::Parse {
                path: path.to_path_buf(),
                column,
                token: (*token).to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
