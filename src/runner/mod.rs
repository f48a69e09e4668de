//! External command abstraction layer
//!
//! Every step of a release is a single call to `git` or `gh`. This module
//! hides process execution behind the [CommandRunner] trait so the workflow
//! can run against real processes or a scripted mock.
//!
//! - [system::SystemRunner]: spawns real processes with `std::process::Command`
//! - [mock::MockRunner]: returns scripted outputs and records invocations

pub mod mock;
pub mod system;

pub use mock::MockRunner;
pub use system::SystemRunner;

use crate::error::{ReleaseError, Result};

/// Captured result of one external command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Successful output with the given stdout
    pub fn success(stdout: impl Into<String>) -> Self {
        CommandOutput {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output with the given exit code and stderr
    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        CommandOutput {
            status: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Attach stderr text to an output (e.g. progress lines from `git fetch`)
    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = stderr.into();
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs external programs
///
/// Implementors must be `Send + Sync`. Arguments are passed verbatim to the
/// program, never through a shell.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and capture its output
    ///
    /// # Returns
    /// * `Ok(CommandOutput)` - The process ran, whatever its exit status
    /// * `Err` - The process could not be started
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// Turns a command output into its trimmed stdout, or a labelled failure.
///
/// A command fails when it exits non-zero or reports an error on stderr (a
/// line starting with `error:` or `fatal:`). With `strict_stderr` any text on
/// stderr counts as failure.
///
/// # Arguments
/// * `label` - Step description shown as the error headline
/// * `output` - Captured command output
/// * `strict_stderr` - Treat any stderr output as failure
pub fn check_output(label: &str, output: CommandOutput, strict_stderr: bool) -> Result<String> {
    let stderr = output.stderr.trim();
    let failed = !output.is_success()
        || (strict_stderr && !stderr.is_empty())
        || reports_error(stderr);

    if failed {
        let detail = if stderr.is_empty() {
            match output.status {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            }
        } else {
            stderr.to_string()
        };
        return Err(ReleaseError::command(label, detail));
    }

    if !stderr.is_empty() {
        tracing::debug!(label, stderr, "command wrote to stderr");
    }

    Ok(output.stdout.trim().to_string())
}

/// Stderr prefixes that mark an error even when the exit status is zero
const ERROR_PREFIXES: [&str; 2] = ["error:", "fatal:"];

fn reports_error(stderr: &str) -> bool {
    stderr.lines().any(|line| {
        let line = line.trim_start().to_ascii_lowercase();
        ERROR_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
    })
}
