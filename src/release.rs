//! `gh release create` command construction and invocation

use crate::error::Result;
use crate::runner::{check_output, CommandRunner};
use chrono::NaiveDate;
use std::fmt;

/// Failure label for the release step
pub const RELEASE_LABEL: &str = "unable to trigger release";

/// Default title date format (month/day/year)
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// A `gh release create` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseCommand {
    program: String,
    tag: String,
    title: String,
    generate_notes: bool,
    latest: bool,
    draft: bool,
}

impl ReleaseCommand {
    /// Release for `tag`, titled `[<tag>] <date>`
    ///
    /// Notes are generated and the release is a draft marked latest unless
    /// switched off with the builder methods.
    pub fn new(tag: impl Into<String>, date: NaiveDate, date_format: &str) -> Self {
        let tag = tag.into();
        let title = format!("[{}] {}", tag, date.format(date_format));

        ReleaseCommand {
            program: "gh".to_string(),
            tag,
            title,
            generate_notes: true,
            latest: true,
            draft: true,
        }
    }

    /// Use a different executable than `gh`
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    #[must_use]
    pub fn with_generate_notes(mut self, generate_notes: bool) -> Self {
        self.generate_notes = generate_notes;
        self
    }

    #[must_use]
    pub fn with_latest(mut self, latest: bool) -> Self {
        self.latest = latest;
        self
    }

    #[must_use]
    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Arguments passed to the release program, in order
    pub fn args(&self) -> Vec<&str> {
        let mut args = vec![
            "release",
            "create",
            self.tag.as_str(),
            "--title",
            self.title.as_str(),
        ];
        if self.generate_notes {
            args.push("--generate-notes");
        }
        if self.latest {
            args.push("--latest");
        }
        if self.draft {
            args.push("--draft");
        }
        args
    }

    /// Run the release command
    ///
    /// # Returns
    /// * `Ok(String)` - Trimmed stdout, normally the release URL
    /// * `Err` - Labelled failure with the program's stderr
    pub fn create<R: CommandRunner>(&self, runner: &R, strict_stderr: bool) -> Result<String> {
        let output = runner.run(&self.program, &self.args())?;
        check_output(RELEASE_LABEL, output, strict_stderr)
    }
}

impl fmt::Display for ReleaseCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args() {
            if arg.contains(char::is_whitespace) || arg.is_empty() {
                write!(f, " \"{}\"", arg.replace('"', "\\\""))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}
