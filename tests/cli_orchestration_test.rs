use chrono::NaiveDate;
use release_tag::cli::{run_release_workflow, ReleaseOutcome, ReleaseWorkflowArgs};
use release_tag::config::Config;
use release_tag::domain::BumpType;
use release_tag::runner::{CommandOutput, MockRunner};
use release_tag::ReleaseError;

const BRANCH: &str = "git branch --show-current";
const FETCH: &str = "git fetch --all --tags";
const DESCRIBE: &str = "git describe --tags --abbrev=0";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
}

fn args(bump: BumpType) -> ReleaseWorkflowArgs {
    ReleaseWorkflowArgs {
        bump,
        dry_run: false,
        yes: false,
    }
}

fn release_line(tag: &str) -> String {
    format!(
        "gh release create {tag} --title [{tag}] 03/07/2024 --generate-notes --latest --draft"
    )
}

fn repo_on(branch: &str, tag: Option<&str>) -> MockRunner {
    let describe = match tag {
        Some(tag) => CommandOutput::success(format!("{}\n", tag)),
        None => CommandOutput::failure(128, "fatal: No names found, cannot describe anything.\n"),
    };

    MockRunner::new()
        .with(BRANCH, CommandOutput::success(format!("{}\n", branch)))
        .with(FETCH, CommandOutput::success("").with_stderr("Fetching origin\n"))
        .with(DESCRIBE, describe)
}

fn never_asked(_: &str) -> anyhow::Result<bool> {
    panic!("confirmation should not be requested");
}

#[test]
fn test_patch_release_runs_steps_in_order() {
    let runner = repo_on("main", Some("v1.2.3")).with(
        release_line("v1.2.4"),
        CommandOutput::success("https://github.com/acme/app/releases/tag/v1.2.4\n"),
    );

    let result = run_release_workflow(
        &args(BumpType::Patch),
        &Config::default(),
        &runner,
        today(),
        never_asked,
    )
    .unwrap();

    assert_eq!(result.previous_tag.as_deref(), Some("v1.2.3"));
    assert_eq!(result.tag, "v1.2.4");
    assert_eq!(
        result.outcome,
        ReleaseOutcome::Created("https://github.com/acme/app/releases/tag/v1.2.4".to_string())
    );
    assert_eq!(
        runner.calls(),
        vec![
            BRANCH.to_string(),
            FETCH.to_string(),
            DESCRIBE.to_string(),
            release_line("v1.2.4"),
        ]
    );
}

#[test]
fn test_bump_types_select_component() {
    for (bump, expected) in [
        (BumpType::Major, "v2.0.0"),
        (BumpType::Minor, "v1.3.0"),
        (BumpType::Patch, "v1.2.4"),
    ] {
        let runner = repo_on("main", Some("v1.2.3"));
        let result =
            run_release_workflow(&args(bump), &Config::default(), &runner, today(), never_asked)
                .unwrap();
        assert_eq!(result.tag, expected);
        assert!(result.command.contains(&format!("--title \"[{}] 03/07/2024\"", expected)));
    }
}

#[test]
fn test_command_text_has_expected_flags() {
    let runner = repo_on("main", Some("v0.4.1"));
    let result = run_release_workflow(
        &args(BumpType::Minor),
        &Config::default(),
        &runner,
        today(),
        never_asked,
    )
    .unwrap();

    assert_eq!(
        result.command,
        "gh release create v0.5.0 --title \"[v0.5.0] 03/07/2024\" --generate-notes --latest --draft"
    );
}

#[test]
fn test_wrong_branch_stops_before_fetch() {
    let runner = repo_on("develop", Some("v1.2.3"));

    let err = run_release_workflow(
        &args(BumpType::Patch),
        &Config::default(),
        &runner,
        today(),
        never_asked,
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReleaseError>(),
        Some(ReleaseError::WrongBranch { .. })
    ));
    assert_eq!(runner.calls(), vec![BRANCH.to_string()]);
}

#[test]
fn test_fetch_failure_stops_workflow() {
    let runner = repo_on("main", Some("v1.2.3")).with(
        FETCH,
        CommandOutput::failure(1, "fatal: unable to access 'https://github.com/acme/app/'\n"),
    );

    let err = run_release_workflow(
        &args(BumpType::Patch),
        &Config::default(),
        &runner,
        today(),
        never_asked,
    )
    .unwrap_err();

    let release_err = err.downcast_ref::<ReleaseError>().unwrap();
    assert_eq!(release_err.label(), Some("unable to get latest tags"));
    assert_eq!(runner.calls(), vec![BRANCH.to_string(), FETCH.to_string()]);
}

#[test]
fn test_strict_stderr_treats_fetch_progress_as_failure() {
    let runner = repo_on("main", Some("v1.2.3"));
    let mut config = Config::default();
    config.behavior.strict_stderr = true;

    let err = run_release_workflow(&args(BumpType::Patch), &config, &runner, today(), never_asked)
        .unwrap_err();

    assert!(err.to_string().contains("unable to get latest tags"));
}

#[test]
fn test_release_failure_is_reported() {
    let runner = repo_on("main", Some("v1.2.3")).with(
        release_line("v1.2.4"),
        CommandOutput::failure(1, "HTTP 422: Validation Failed\n"),
    );

    let err = run_release_workflow(
        &args(BumpType::Patch),
        &Config::default(),
        &runner,
        today(),
        never_asked,
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "unable to trigger release: HTTP 422: Validation Failed"
    );
}

#[test]
fn test_dry_run_does_not_create_release() {
    let runner = repo_on("main", Some("v1.2.3"));
    let dry_run = ReleaseWorkflowArgs {
        dry_run: true,
        ..args(BumpType::Patch)
    };

    let result =
        run_release_workflow(&dry_run, &Config::default(), &runner, today(), never_asked).unwrap();

    assert_eq!(result.outcome, ReleaseOutcome::DryRun);
    assert_eq!(runner.calls().len(), 3);
}

#[test]
fn test_first_release_uses_initial_version() {
    let runner = repo_on("main", None);

    let result = run_release_workflow(
        &args(BumpType::Major),
        &Config::default(),
        &runner,
        today(),
        never_asked,
    )
    .unwrap();

    assert_eq!(result.previous_tag, None);
    assert_eq!(result.tag, "v0.1.0");
}

#[test]
fn test_unparsable_tag_is_error() {
    let runner = repo_on("main", Some("nightly"));

    let err = run_release_workflow(
        &args(BumpType::Patch),
        &Config::default(),
        &runner,
        today(),
        never_asked,
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReleaseError>(),
        Some(ReleaseError::Version(_))
    ));
    assert_eq!(runner.calls().len(), 3);
}

#[test]
fn test_custom_pattern_and_branch() {
    let runner = MockRunner::new()
        .with(BRANCH, CommandOutput::success("trunk\n"))
        .with(DESCRIBE, CommandOutput::success("release-3.1.4\n"));
    let mut config = Config::default();
    config.release_branch = "trunk".to_string();
    config.tag_pattern = "release-{version}".to_string();
    config.release.draft = false;

    let result = run_release_workflow(&args(BumpType::Minor), &config, &runner, today(), never_asked)
        .unwrap();

    assert_eq!(result.tag, "release-3.2.0");
    assert!(!result.command.contains("--draft"));
}

#[test]
fn test_confirmation_declined_cancels() {
    let runner = repo_on("main", Some("v1.2.3"));
    let mut config = Config::default();
    config.behavior.confirm = true;

    let result = run_release_workflow(&args(BumpType::Patch), &config, &runner, today(), |prompt| {
        assert_eq!(prompt, "Create release v1.2.4?");
        Ok(false)
    })
    .unwrap();

    assert_eq!(result.outcome, ReleaseOutcome::Cancelled);
    assert_eq!(runner.calls().len(), 3);
}

#[test]
fn test_yes_skips_confirmation() {
    let runner = repo_on("main", Some("v1.2.3"));
    let mut config = Config::default();
    config.behavior.confirm = true;
    let yes = ReleaseWorkflowArgs {
        yes: true,
        ..args(BumpType::Patch)
    };

    let result = run_release_workflow(&yes, &config, &runner, today(), never_asked).unwrap();

    assert!(matches!(result.outcome, ReleaseOutcome::Created(_)));
    assert_eq!(runner.calls().len(), 4);
}

#[test]
fn test_error_on_stderr_stops_workflow_despite_zero_exit() {
    let runner = repo_on("main", Some("v1.0.0")).with(
        FETCH,
        CommandOutput::success("").with_stderr("error: could not fetch upstream\n"),
    );

    let err = run_release_workflow(
        &args(BumpType::Patch),
        &Config::default(),
        &runner,
        today(),
        never_asked,
    )
    .unwrap_err();

    assert!(err.to_string().contains("unable to get latest tags"));
    assert_eq!(runner.calls(), vec![BRANCH.to_string(), FETCH.to_string()]);
}

#[test]
fn test_invalid_config_is_rejected_before_any_command() {
    let runner = repo_on("main", Some("v1.2.3"));
    let mut config = Config::default();
    config.release.title_date_format = "%Q".to_string();

    let err = run_release_workflow(&args(BumpType::Patch), &config, &runner, today(), never_asked)
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReleaseError>(),
        Some(ReleaseError::Config(_))
    ));
    assert!(runner.calls().is_empty());
}

#[test]
fn test_tag_outside_pattern_is_still_bumped() {
    let runner = repo_on("main", Some("v1.2.3"));
    let mut config = Config::default();
    config.tag_pattern = "release-{version}".to_string();

    let result = run_release_workflow(&args(BumpType::Patch), &config, &runner, today(), never_asked)
        .unwrap();

    assert_eq!(result.previous_tag.as_deref(), Some("v1.2.3"));
    assert_eq!(result.tag, "release-1.2.4");
    assert!(result.command.starts_with("gh release create release-1.2.4 "));
}

#[test]
fn test_version_overflow_is_error() {
    let runner = repo_on("main", Some("v18446744073709551615.0.0"));

    let err = run_release_workflow(
        &args(BumpType::Major),
        &Config::default(),
        &runner,
        today(),
        never_asked,
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReleaseError>(),
        Some(ReleaseError::Version(_))
    ));
    assert_eq!(runner.calls().len(), 3);
}
