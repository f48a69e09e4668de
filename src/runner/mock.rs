use crate::error::Result;
use crate::runner::{CommandOutput, CommandRunner};
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock runner for testing without spawning processes
///
/// Responses are keyed by the full command line (`"git branch --show-current"`).
/// Unscripted commands succeed with empty output.
pub struct MockRunner {
    responses: HashMap<String, CommandOutput>,
    calls: Mutex<Vec<String>>,
}

impl MockRunner {
    /// Create a new mock with no scripted responses
    pub fn new() -> Self {
        MockRunner {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script the output returned for a command line
    pub fn on(&mut self, command_line: impl Into<String>, output: CommandOutput) {
        self.responses.insert(command_line.into(), output);
    }

    /// Builder form of [MockRunner::on]
    pub fn with(mut self, command_line: impl Into<String>, output: CommandOutput) -> Self {
        self.on(command_line, output);
        self
    }

    /// Every command line run so far, in order
    pub fn calls(&self) -> Vec<String> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn command_line(program: &str, args: &[&str]) -> String {
        std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let line = Self::command_line(program, args);
        match self.calls.lock() {
            Ok(mut calls) => calls.push(line.clone()),
            Err(poisoned) => poisoned.into_inner().push(line.clone()),
        }

        Ok(self
            .responses
            .get(&line)
            .cloned()
            .unwrap_or_else(|| CommandOutput::success("")))
    }
}
