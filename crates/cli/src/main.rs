// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regression driver binary entry point.

use std::path::Path;

use clap::Parser;

use chemreg::cli::Cli;
use chemreg::output::print_error;
use chemreg::runner::CaseRunner;
use chemreg::suite::Suite;
use chemreg_compare::ReportLog;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            print_error(format!("cannot resolve working directory: {}", e));
            std::process::exit(1);
        }
    };

    let log = match cli.report.as_deref() {
        Some(path) => match ReportLog::with_file(Path::new(path)) {
            Ok(log) => log,
            Err(e) => {
                print_error(format!("cannot open report file {}: {}", path, e));
                std::process::exit(1);
            }
        },
        None => ReportLog::new(),
    };

    let mut suite = match cli.suite.as_deref() {
        Some(path) => match Suite::load(Path::new(path), &cli.mpirun_path, cli.num_cores) {
            Ok(suite) => suite,
            Err(e) => {
                print_error(e.to_string());
                std::process::exit(1);
            }
        },
        None => Suite::builtin(&cli.mpirun_path, cli.num_cores),
    };

    let runner = CaseRunner::new(root, log);
    let outcome = suite.run(&runner).await;
    std::process::exit(outcome.exit_code());
}
