//! Streaming process runner with a waiting indicator.
//!
//! Spawns the external runner, shows the spinner until the first output
//! line arrives, then relays the child's combined stdout/stderr to the
//! terminal line-by-line as it streams. The child's exit status maps to a
//! typed [`RunError`], with a missing executable kept distinct from a
//! non-zero exit. Background tasks are stopped on every exit path.

use std::process::Stdio;
use std::time::Instant;

use colored::Colorize;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

use super::kind::RunnerKind;
use super::spinner::Spinner;
use super::stats::MemPoller;
use crate::output;

/// Failures from a runner invocation.
#[derive(Debug, Error)]
pub enum RunError {
    /// The executable is not on PATH. Never conflated with a bad exit.
    #[error("{program} not found; make sure it is installed and on your PATH")]
    NotFound { program: String },
    /// The child ran but exited non-zero.
    #[error("{program} exited with status {code}")]
    Exited { program: String, code: i32 },
    /// The child died to a signal and reported no exit code.
    #[error("{program} was terminated by a signal")]
    Killed { program: String },
    /// Ctrl-C arrived mid-run; the child was killed.
    #[error("interrupted")]
    Interrupted,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Per-invocation runner options.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Ask the local runner to suppress internal reasoning output.
    pub hide_thinking: bool,
    /// Print periodic memory readings for the child.
    pub poll_memory: bool,
}

/// What a successful run looked like, for callers and tests.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Lines relayed from the child's combined output.
    pub lines_relayed: usize,
    /// Wall-clock duration of the whole run in seconds.
    pub total_secs: f64,
}

/// Run an aliased prompt through its resolved runner.
pub async fn run(
    kind: RunnerKind,
    model: &str,
    prompt: &str,
    opts: RunOptions,
) -> Result<RunSummary, RunError> {
    println!(
        "{}",
        format!("Calling {} with model: {}", kind.program(), model).dimmed()
    );
    println!();
    let args = kind.build_args(model, prompt, opts.hide_thinking);
    run_command(kind.program(), &args, opts.poll_memory).await
}

/// Spawn `program` with `args` and stream its output.
pub(crate) async fn run_command(
    program: &str,
    args: &[String],
    poll_memory: bool,
) -> Result<RunSummary, RunError> {
    let started = Instant::now();

    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(RunError::NotFound {
                program: program.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| std::io::Error::other("child stdout was not captured"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| std::io::Error::other("child stderr was not captured"))?;
    let mut out_lines = BufReader::new(stdout).lines();
    let mut err_lines = BufReader::new(stderr).lines();

    let mut spinner = Some(Spinner::start(started));
    let mut poller = match (poll_memory, child.id()) {
        (true, Some(pid)) => Some(MemPoller::start(pid)),
        _ => None,
    };

    let mut lines_relayed = 0usize;
    let mut out_open = true;
    let mut err_open = true;

    // Both pipes are read to exhaustion; either one can carry the first line
    // that stops the indicator. next_line is cancel-safe, so losing a select
    // race never drops output.
    while out_open || err_open {
        tokio::select! {
            line = out_lines.next_line(), if out_open => match line {
                Ok(Some(line)) => {
                    relay(&mut spinner, started, &line).await;
                    lines_relayed += 1;
                }
                Ok(None) => out_open = false,
                Err(e) => {
                    shutdown(spinner.take(), poller.take()).await;
                    return Err(e.into());
                }
            },
            line = err_lines.next_line(), if err_open => match line {
                Ok(Some(line)) => {
                    relay(&mut spinner, started, &line).await;
                    lines_relayed += 1;
                }
                Ok(None) => err_open = false,
                Err(e) => {
                    shutdown(spinner.take(), poller.take()).await;
                    return Err(e.into());
                }
            },
            _ = tokio::signal::ctrl_c() => {
                let _ = child.start_kill();
                shutdown(spinner.take(), poller.take()).await;
                let _ = child.wait().await;
                return Err(RunError::Interrupted);
            }
        }
    }

    // A child that never printed still gets its indicator stopped and a
    // waited-for summary once the process exits.
    if let Some(sp) = spinner.take() {
        sp.stop().await;
        println!(
            "{}",
            format!(" Thought for {:.1}s", started.elapsed().as_secs_f64()).dimmed()
        );
    }

    let status = match child.wait().await {
        Ok(status) => status,
        Err(e) => {
            shutdown(None, poller.take()).await;
            return Err(e.into());
        }
    };
    if let Some(p) = poller.take() {
        p.stop().await;
    }

    if !status.success() {
        return match status.code() {
            Some(code) => Err(RunError::Exited {
                program: program.to_string(),
                code,
            }),
            None => Err(RunError::Killed {
                program: program.to_string(),
            }),
        };
    }

    let total_secs = started.elapsed().as_secs_f64();
    println!();
    output::rule();
    println!("{}", format!("  Total time: {:.1}s", total_secs).dimmed());
    println!();

    Ok(RunSummary {
        lines_relayed,
        total_secs,
    })
}

/// Relay one line, stopping the indicator permanently on the first.
async fn relay(spinner: &mut Option<Spinner>, started: Instant, line: &str) {
    if let Some(sp) = spinner.take() {
        sp.stop().await;
        println!(
            "{}",
            format!(" Thought for {:.1}s", started.elapsed().as_secs_f64()).dimmed()
        );
        output::rule();
        println!();
    }
    println!("{}", line);
}

/// Stop whichever background tasks are still running.
async fn shutdown(spinner: Option<Spinner>, poller: Option<MemPoller>) {
    if let Some(sp) = spinner {
        sp.stop().await;
    }
    if let Some(p) = poller {
        p.stop().await;
    }
}
