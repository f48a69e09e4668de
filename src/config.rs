use crate::domain::TagPattern;
use crate::error::{ReleaseError, Result};
use crate::release::DEFAULT_DATE_FORMAT;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "releasetag.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".releasetag.toml";

/// Represents the complete configuration for release-tag.
///
/// Every field has a default, so an empty file (or no file) is a valid configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Branch releases must be cut from
    #[serde(default = "default_release_branch")]
    pub release_branch: String,

    /// Tag naming pattern containing one `{version}` placeholder
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    /// Version proposed when the repository has no tags yet
    #[serde(default = "default_initial_version")]
    pub initial_version: String,

    #[serde(default)]
    pub commands: CommandsConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_release_branch() -> String {
    "main".to_string()
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_initial_version() -> String {
    "0.1.0".to_string()
}

fn default_git() -> String {
    "git".to_string()
}

fn default_gh() -> String {
    "gh".to_string()
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// External programs invoked by the workflow.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CommandsConfig {
    #[serde(default = "default_git")]
    pub git: String,

    #[serde(default = "default_gh")]
    pub gh: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        CommandsConfig {
            git: default_git(),
            gh: default_gh(),
        }
    }
}

/// Flags and title format of the created release.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_true")]
    pub generate_notes: bool,

    #[serde(default = "default_true")]
    pub latest: bool,

    #[serde(default = "default_true")]
    pub draft: bool,

    /// strftime format of the date in the release title
    #[serde(default = "default_date_format")]
    pub title_date_format: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            generate_notes: true,
            latest: true,
            draft: true,
            title_date_format: default_date_format(),
        }
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Treat any stderr output of an external command as failure
    #[serde(default)]
    pub strict_stderr: bool,

    /// Ask before creating the release
    #[serde(default)]
    pub confirm: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            release_branch: default_release_branch(),
            tag_pattern: default_tag_pattern(),
            initial_version: default_initial_version(),
            commands: CommandsConfig::default(),
            release: ReleaseConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text and validates it.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(text).map_err(|e| ReleaseError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Tag pattern as a checked [TagPattern]
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.tag_pattern.clone())
    }

    /// Rejects values that would only fail halfway through a release.
    pub fn validate(&self) -> Result<()> {
        if self.release_branch.trim().is_empty() {
            return Err(ReleaseError::config("release_branch must not be empty"));
        }

        self.tag_pattern()
            .map_err(|e| ReleaseError::config(e.to_string()))?;

        semver::Version::parse(&self.initial_version).map_err(|e| {
            ReleaseError::config(format!(
                "initial_version '{}' is not a semantic version: {}",
                self.initial_version, e
            ))
        })?;

        if StrftimeItems::new(&self.release.title_date_format).any(|item| item == Item::Error) {
            return Err(ReleaseError::config(format!(
                "title_date_format '{}' is not a valid strftime format",
                self.release.title_date_format
            )));
        }

        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasetag.toml` in current directory
/// 3. `.releasetag.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed, or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)
            .map_err(|e| ReleaseError::config(format!("cannot read '{}': {}", path, e)))?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    Config::from_toml(&config_str)
}
