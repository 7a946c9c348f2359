// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Case lifecycle engine: input rewrite, launch, supervision, extraction,
//! and verdicts.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::process::{Child, Command};

use chemreg_compare::{
    classify, compare_columns, failed_checks, read_last_line_values, CaseStatus, ExtractError,
    ReportLog, ValueCheck,
};

use crate::case::CaseSpec;
use crate::input::{rewrite_input_file, InputError};
use crate::output::print_error;

/// Progress is reported at most once per this much elapsed run time.
pub const PROGRESS_INTERVAL: Duration = Duration::from_secs(60);

/// Failures that end a run before a verdict can be computed.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to create {path}: {source}")]
    OutputRedirect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to wait on '{command}': {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Outcome of one full case lifecycle.
#[derive(Clone, Debug)]
pub struct CaseOutcome {
    /// Final classification, also written back to the descriptor.
    pub status: CaseStatus,
    /// Per-value verdicts, one entry per configured truth value.
    pub checks: Vec<ValueCheck>,
    /// Child exit code; `None` when the run failed before one was recorded.
    pub exit_code: Option<i32>,
    /// Wall-clock time spent on the case.
    pub duration: Duration,
}

impl CaseOutcome {
    /// True when the run completed cleanly and every compared value passed.
    pub fn all_passed(&self) -> bool {
        self.status == CaseStatus::Passed
    }
}

/// Runs cases against an explicit invocation root.
///
/// Every file operation goes through the resolved run directory; the
/// process-wide working directory is never changed, so the caller's context
/// survives every exit path, including launch failure.
pub struct CaseRunner {
    root: PathBuf,
    log: ReportLog,
}

impl CaseRunner {
    pub fn new(root: impl Into<PathBuf>, log: ReportLog) -> Self {
        Self {
            root: root.into(),
            log,
        }
    }

    /// The report log records are appended to.
    pub fn log(&self) -> &ReportLog {
        &self.log
    }

    /// Drive one case through its full lifecycle and write the final status
    /// back to the descriptor.
    ///
    /// A failure at any stage (missing input file, launch error, unreadable
    /// output) classifies the case ERRORS with every expected value marked
    /// failed; it never panics and never skips the closing report.
    pub async fn run_case(&self, case: &mut CaseSpec) -> CaseOutcome {
        let run_dir = self.root.join(case.run_directory());
        let command = render_command(case);

        println!("---------- Starting Test: {} ----------", case.name());
        println!("Run directory: {}", run_dir.display());
        println!("Started at: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
        let started = Instant::now();

        let (status, exit_code, checks) = match self.execute(case, &run_dir, &command).await {
            Ok((code, checks)) => (classify(code == 0, &checks), Some(code), checks),
            Err(err) => {
                print_error(&err);
                (CaseStatus::Errors, None, all_failed(case))
            }
        };

        match status {
            CaseStatus::Passed => println!("All tests for {} PASSED!", case.name()),
            CaseStatus::Mismatch => {
                println!("Tests for {} FAILED!", case.name());
                for check in checks.iter().filter(|c| !c.passed) {
                    match check.actual {
                        Some(actual) => println!(
                            "  {} column {}: expecting {}, got {}",
                            check.file, check.column, check.expected, actual
                        ),
                        None => println!(
                            "  {} column {}: expecting {}, got nothing",
                            check.file, check.column, check.expected
                        ),
                    }
                }
            }
            CaseStatus::Errors => println!("Tests for {} had ERRORS", case.name()),
            CaseStatus::NotRun => {}
        }

        let duration = started.elapsed();
        case.set_status(status);
        self.log.record(
            case.name(),
            status,
            &command,
            exit_code,
            checks.clone(),
            duration,
        );

        println!("Test Duration: {}", format_duration(duration));
        println!("---------- End Test: {} ----------", case.name());
        println!();

        CaseOutcome {
            status,
            checks,
            exit_code,
            duration,
        }
    }

    async fn execute(
        &self,
        case: &CaseSpec,
        run_dir: &Path,
        command: &str,
    ) -> Result<(i32, Vec<ValueCheck>), RunError> {
        println!("Modifying input file...");
        rewrite_input_file(run_dir, case)?;

        println!("{}", command);
        let out_path = run_dir.join(format!("{}.out", case.name()));
        let out_file = File::create(&out_path).map_err(|source| RunError::OutputRedirect {
            path: out_path.clone(),
            source,
        })?;

        let mut cmd = Command::new(case.mpirun_path());
        cmd.arg("-np")
            .arg(case.processors().to_string())
            .arg(case.solver_path())
            .arg(case.name());
        if let Some(restart) = case.restart_file() {
            cmd.arg(restart);
        }
        cmd.current_dir(run_dir).stdout(Stdio::from(out_file));

        let mut child = cmd.spawn().map_err(|source| RunError::Launch {
            command: command.to_string(),
            source,
        })?;

        let exit = supervise(&mut child, Instant::now())
            .await
            .map_err(|source| RunError::Wait {
                command: command.to_string(),
                source,
            })?;
        // Signal termination carries no code; read it as a failure.
        let code = exit.code().unwrap_or(-1);

        if code == 0 {
            println!("Simulation completed with no errors");
            let mut checks = Vec::new();
            for check in case.checks() {
                let actual =
                    read_last_line_values(&run_dir.join(&check.file), &check.columns)?;
                checks.extend(compare_columns(
                    &check.file,
                    &check.columns,
                    &check.values,
                    &actual,
                    case.tolerance(),
                ));
            }
            Ok((code, checks))
        } else {
            println!("ERROR: Simulation terminated with errors");
            Ok((code, all_failed(case)))
        }
    }
}

/// Wait for the child to exit, printing a run-time line at most once per
/// [`PROGRESS_INTERVAL`] of elapsed real time.
async fn supervise(child: &mut Child, started: Instant) -> std::io::Result<std::process::ExitStatus> {
    let mut progress = tokio::time::interval(PROGRESS_INTERVAL);
    // The first tick completes immediately; consume it before the loop.
    progress.tick().await;
    loop {
        tokio::select! {
            exit = child.wait() => return exit,
            _ = progress.tick() => {
                println!("----- Run Time: {} -----", format_duration(started.elapsed()));
            }
        }
    }
}

/// Render the launch command the way it is executed, for the banner and the
/// report log.
fn render_command(case: &CaseSpec) -> String {
    let mut command = format!(
        "{} -np {} {} {}",
        case.mpirun_path(),
        case.processors(),
        case.solver_path(),
        case.name()
    );
    if let Some(restart) = case.restart_file() {
        command.push(' ');
        command.push_str(restart);
    }
    command.push_str(&format!(" > {}.out", case.name()));
    command
}

/// Every expected value of the case marked failed, no output consulted.
fn all_failed(case: &CaseSpec) -> Vec<ValueCheck> {
    case.checks()
        .iter()
        .flat_map(|check| failed_checks(&check.file, &check.columns, &check.values))
        .collect()
}

fn format_duration(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
