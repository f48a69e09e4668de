use std::fmt;

/// Non-fatal conditions found while working out the next release tag.
/// These are reported to the user and the release continues.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The repository has no tags; the initial version is proposed instead of a bump
    NoTagsFound { initial_tag: String },
    /// Current tag exists but doesn't match the configured pattern
    TagMismatchPattern { tag: String, pattern: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoTagsFound { initial_tag } => {
                write!(f, "No tags found, proposing initial tag '{}'", initial_tag)
            }
            BoundaryWarning::TagMismatchPattern { tag, pattern } => {
                write!(f, "Tag '{}' does not match pattern '{}'", tag, pattern)
            }
        }
    }
}
