//! Main workflow orchestration logic
//!
//! Runs the release steps in order against any [CommandRunner], keeping
//! argument parsing and process setup in `main.rs`.

use anyhow::Result;
use chrono::NaiveDate;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{next_tag, BumpType};
use crate::git::Git;
use crate::release::ReleaseCommand;
use crate::runner::CommandRunner;
use crate::ui;

/// Arguments for the release workflow
///
/// Mirrors the CLI Args so the workflow can be called without clap.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Version component to increment
    pub bump: BumpType,

    /// Print the release command without running it
    pub dry_run: bool,

    /// Skip the confirmation prompt
    pub yes: bool,
}

/// How the workflow ended
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// Release created; holds the release program's output (the release URL)
    Created(String),
    /// Dry run, nothing was created
    DryRun,
    /// User declined the confirmation prompt
    Cancelled,
}

/// Result of a completed release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Tag the release was computed from, `None` for the first release
    pub previous_tag: Option<String>,

    /// The proposed tag
    pub tag: String,

    /// Rendered release command
    pub command: String,

    pub outcome: ReleaseOutcome,
}

/// Main release workflow
///
/// 1. Verify the release branch is checked out
/// 2. Fetch tags from all remotes
/// 3. Read the current tag
/// 4. Compute the proposed tag
/// 5. Build and run the release command
///
/// The configuration is validated first. Any failing step stops the
/// workflow with its labelled error.
///
/// # Arguments
///
/// * `args` - Workflow arguments (bump type, dry run, yes)
/// * `config` - Release configuration
/// * `runner` - Executes `git` and `gh`
/// * `today` - Date used in the release title
/// * `confirm` - Asked before the release is created, when confirmation is enabled
pub fn run_release_workflow<R, F>(
    args: &ReleaseWorkflowArgs,
    config: &Config,
    runner: &R,
    today: NaiveDate,
    confirm: F,
) -> Result<WorkflowResult>
where
    R: CommandRunner,
    F: FnOnce(&str) -> Result<bool>,
{
    config.validate()?;

    let strict = config.behavior.strict_stderr;
    let pattern = config.tag_pattern()?;
    let git = Git::new(runner, config.commands.git.as_str(), strict);

    git.ensure_on_branch(&config.release_branch)?;
    git.refresh_tags()?;

    let previous_tag = git.latest_tag()?;
    ui::display_info("current tag", previous_tag.as_deref().unwrap_or("(none)"));

    let tag = match previous_tag.as_deref() {
        Some(current) => {
            if !pattern.matches(current)? {
                ui::display_boundary_warning(&BoundaryWarning::TagMismatchPattern {
                    tag: current.to_string(),
                    pattern: pattern.pattern.clone(),
                });
            }
            next_tag(current, args.bump, &pattern)?
        }
        None => {
            let initial = semver::Version::parse(&config.initial_version)?;
            let initial_tag = pattern.format(&initial);
            ui::display_boundary_warning(&BoundaryWarning::NoTagsFound {
                initial_tag: initial_tag.clone(),
            });
            initial_tag
        }
    };
    ui::display_info("proposed tag", &tag);
    tracing::info!(bump = %args.bump, previous = ?previous_tag, proposed = %tag, "computed release tag");

    let release = ReleaseCommand::new(tag.clone(), today, &config.release.title_date_format)
        .with_program(config.commands.gh.as_str())
        .with_generate_notes(config.release.generate_notes)
        .with_latest(config.release.latest)
        .with_draft(config.release.draft);
    let command = release.to_string();
    ui::display_info("release command", &command);

    let finish = |outcome| WorkflowResult {
        previous_tag: previous_tag.clone(),
        tag: tag.clone(),
        command: command.clone(),
        outcome,
    };

    if args.dry_run {
        return Ok(finish(ReleaseOutcome::DryRun));
    }

    if config.behavior.confirm
        && !args.yes
        && !confirm(&format!("Create release {}?", tag))?
    {
        return Ok(finish(ReleaseOutcome::Cancelled));
    }

    let status = release.create(runner, strict)?;
    ui::display_info("release status", &status);

    Ok(finish(ReleaseOutcome::Created(status)))
}
