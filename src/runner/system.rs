use crate::error::Result;
use crate::runner::{CommandOutput, CommandRunner};
use std::process::Command;

/// Runs commands as real child processes
///
/// Commands run in the current working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        tracing::debug!(program, ?args, "running external command");

        let mut cmd = Command::new(program);
        cmd.args(args);

        let output = cmd.output()?;
        let result = CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        tracing::debug!(program, status = ?result.status, "external command finished");
        Ok(result)
    }
}
