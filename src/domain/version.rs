use crate::error::{ReleaseError, Result};
use semver::{BuildMetadata, Prerelease, Version};
use std::fmt;

/// Which semantic-version component a release increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BumpType {
    Major,
    Minor,
    #[default]
    Patch,
}

impl BumpType {
    /// Apply this bump to a version
    ///
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    ///
    /// Pre-release and build metadata are dropped from the result.
    /// Fails when the incremented component would overflow.
    pub fn apply(&self, version: &Version) -> Result<Version> {
        let overflow = || {
            ReleaseError::version(format!(
                "{} bump of {} overflows the {} component",
                self, version, self
            ))
        };

        let (major, minor, patch) = match self {
            BumpType::Major => (version.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
            BumpType::Minor => (
                version.major,
                version.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            BumpType::Patch => (
                version.major,
                version.minor,
                version.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };

        Ok(Version {
            major,
            minor,
            patch,
            pre: Prerelease::EMPTY,
            build: BuildMetadata::EMPTY,
        })
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpType::Major => "major",
            BumpType::Minor => "minor",
            BumpType::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// Parse a bare version string such as `1.2.3` or `1.2.3-rc.1`
pub fn parse_version(raw: &str) -> Result<Version> {
    Version::parse(raw.trim())
        .map_err(|e| ReleaseError::version(format!("'{}' is not a semantic version: {}", raw, e)))
}
