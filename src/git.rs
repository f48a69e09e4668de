//! Version-control queries backed by the `git` executable

use crate::domain::BranchContext;
use crate::error::{ReleaseError, Result};
use crate::runner::{check_output, CommandRunner};

/// Failure labels, shown as the headline when a git step fails
pub const BRANCH_LABEL: &str = "unable to get current branch name";
pub const FETCH_LABEL: &str = "unable to get latest tags";
pub const DESCRIBE_LABEL: &str = "unable to get current tag";

/// `git describe` messages meaning "no tag reachable", not a real failure
const NO_TAG_MARKERS: [&str; 2] = ["No names found", "No tags can describe"];

/// Git client over a [CommandRunner]
pub struct Git<'a, R: CommandRunner> {
    runner: &'a R,
    program: String,
    strict_stderr: bool,
}

impl<'a, R: CommandRunner> Git<'a, R> {
    /// # Arguments
    /// * `runner` - Executes the git commands
    /// * `program` - Git executable name or path
    /// * `strict_stderr` - Treat any stderr output as failure
    pub fn new(runner: &'a R, program: impl Into<String>, strict_stderr: bool) -> Self {
        Git {
            runner,
            program: program.into(),
            strict_stderr,
        }
    }

    fn run(&self, label: &str, args: &[&str]) -> Result<String> {
        let output = self.runner.run(&self.program, args)?;
        check_output(label, output, self.strict_stderr)
    }

    /// Name of the checked-out branch (empty on a detached HEAD)
    pub fn current_branch(&self) -> Result<String> {
        self.run(BRANCH_LABEL, &["branch", "--show-current"])
    }

    /// Fails with [ReleaseError::WrongBranch] unless `release_branch` is checked out
    pub fn ensure_on_branch(&self, release_branch: &str) -> Result<BranchContext> {
        let branch = BranchContext::new(self.current_branch()?, release_branch);
        if !branch.is_release_branch() {
            let actual = if branch.is_detached() {
                "detached HEAD".to_string()
            } else {
                branch.name.clone()
            };
            return Err(ReleaseError::WrongBranch {
                expected: release_branch.to_string(),
                actual,
            });
        }
        Ok(branch)
    }

    /// Fetch all remotes and their tags
    pub fn refresh_tags(&self) -> Result<()> {
        self.run(FETCH_LABEL, &["fetch", "--all", "--tags"])?;
        Ok(())
    }

    /// Most recent tag reachable from HEAD
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - The nearest tag
    /// * `Ok(None)` - The repository has no tags yet
    /// * `Err` - `git describe` failed for any other reason
    pub fn latest_tag(&self) -> Result<Option<String>> {
        let output = self
            .runner
            .run(&self.program, &["describe", "--tags", "--abbrev=0"])?;

        if !output.is_success()
            && NO_TAG_MARKERS
                .iter()
                .any(|marker| output.stderr.contains(marker))
        {
            tracing::debug!(stderr = %output.stderr.trim(), "no tags reachable from HEAD");
            return Ok(None);
        }

        let tag = check_output(DESCRIBE_LABEL, output, self.strict_stderr)?;
        Ok(if tag.is_empty() { None } else { Some(tag) })
    }
}
