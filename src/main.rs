use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_tag::cli::{run_release_workflow, ReleaseOutcome, ReleaseWorkflowArgs};
use release_tag::domain::BumpType;
use release_tag::runner::SystemRunner;
use release_tag::{config, ui, ReleaseError};

#[derive(clap::Parser)]
#[command(
    name = "release-tag",
    version,
    about = "Compute the next release tag and create a GitHub release for it"
)]
struct Args {
    #[arg(value_enum, default_value_t = BumpType::Patch, help = "Version component to bump")]
    bump: BumpType,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview the release command without running it")]
    dry_run: bool,

    #[arg(short, long, help = "Skip the confirmation prompt")]
    yes: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        report(&e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    tracing::debug!(?config, "loaded configuration");

    let workflow_args = ReleaseWorkflowArgs {
        bump: args.bump,
        dry_run: args.dry_run,
        yes: args.yes,
    };
    let today = chrono::Local::now().date_naive();

    let result = run_release_workflow(
        &workflow_args,
        &config,
        &SystemRunner::new(),
        today,
        ui::confirm_action,
    )?;

    match result.outcome {
        ReleaseOutcome::Created(_) => {
            ui::display_success(&format!("Created release {}", result.tag));
        }
        ReleaseOutcome::DryRun => {
            ui::display_success(&format!("Dry run: release {} was not created", result.tag));
        }
        ReleaseOutcome::Cancelled => println!("Release cancelled by user."),
    }

    Ok(())
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<ReleaseError>() {
        Some(ReleaseError::Command { label, detail }) => {
            ui::display_error(label, Some(detail.as_str()))
        }
        _ => ui::display_error(&err.to_string(), None),
    }
}
