// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing for the regression driver.

use clap::Parser;

/// CHEM regression suite runner
#[derive(Parser, Clone, Debug)]
#[command(
    name = "chemreg",
    version,
    about = "Regression suite runner for the CHEM flow solver"
)]
pub struct Cli {
    /// Path to mpirun
    #[arg(short = 'm', long = "mpirunPath", default_value = "mpirun")]
    pub mpirun_path: String,

    /// Maximum number of cores to use
    #[arg(
        short = 'n',
        long = "numCores",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub num_cores: u32,

    /// Suite definition file (TOML or JSON); the built-in suite runs when omitted
    #[arg(long, env = "CHEMREG_SUITE")]
    pub suite: Option<String>,

    /// JSONL report file recording per-case results
    #[arg(long, env = "CHEMREG_REPORT")]
    pub report: Option<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
