use crate::domain::version::{parse_version, BumpType};
use crate::error::{ReleaseError, Result};
use semver::Version;

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern
    ///
    /// The pattern must contain exactly one `{version}` placeholder.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.matches(PLACEHOLDER).count() != 1 {
            return Err(ReleaseError::tag(format!(
                "Invalid pattern '{}': should have exactly one {{version}} placeholder",
                pattern
            )));
        }
        Ok(TagPattern { pattern })
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace(PLACEHOLDER, &version.to_string())
    }

    fn regex(&self) -> Result<regex::Regex> {
        let escaped = regex::escape(&self.pattern);
        let version_re = r"(\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?)";
        let regex_pattern = escaped.replace(r"\{version\}", version_re);

        regex::Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| ReleaseError::tag(format!("Invalid pattern '{}': {}", self.pattern, e)))
    }

    /// Validate if a tag matches this pattern
    pub fn matches(&self, tag: &str) -> Result<bool> {
        Ok(self.regex()?.is_match(tag))
    }

    /// Extract the version text from a tag matching this pattern
    pub fn extract_version(&self, tag: &str) -> Result<Option<String>> {
        Ok(self
            .regex()?
            .captures(tag)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()))
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern {
            pattern: "v{version}".to_string(),
        }
    }
}

/// Parse the version out of a tag.
///
/// Tags matching `pattern` have the pattern stripped; anything else falls back
/// to removing a leading 'v' or 'V'.
pub fn version_from_tag(tag: &str, pattern: &TagPattern) -> Result<Version> {
    let tag = tag.trim();
    let raw = match pattern.extract_version(tag)? {
        Some(version) => version,
        None => tag.trim_start_matches(['v', 'V']).to_string(),
    };

    parse_version(&raw)
        .map_err(|_| ReleaseError::version(format!("Cannot parse version from tag '{}'", tag)))
}

/// Compute the tag that follows `current` for the given bump
///
/// # Example
/// ```ignore
/// let pattern = TagPattern::default();
/// assert_eq!(next_tag("v1.2.3", BumpType::Minor, &pattern)?, "v1.3.0");
/// ```
pub fn next_tag(current: &str, bump: BumpType, pattern: &TagPattern) -> Result<String> {
    let version = version_from_tag(current, pattern)?;
    Ok(pattern.format(&bump.apply(&version)?))
}
