use thiserror::Error;

/// Unified error type for release-tag operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// An external command exited unsuccessfully (or wrote to stderr in strict mode)
    #[error("{label}: {detail}")]
    Command { label: String, detail: String },

    #[error("please switch to {expected} branch (currently on '{actual}')")]
    WrongBranch { expected: String, actual: String },

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-tag
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a command failure with the step label and the command's own output
    pub fn command(label: impl Into<String>, detail: impl Into<String>) -> Self {
        ReleaseError::Command {
            label: label.into(),
            detail: detail.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ReleaseError::Tag(msg.into())
    }

    /// Step label for command failures, used as the headline of the error output.
    pub fn label(&self) -> Option<&str> {
        match self {
            ReleaseError::Command { label, .. } => Some(label),
            _ => None,
        }
    }
}
