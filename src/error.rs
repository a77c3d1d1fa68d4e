use thiserror::Error;

/// Unified error type for track-bump operations
#[derive(Error, Debug)]
pub enum TrackBumpError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Branch '{0}' is not supported")]
    UnsupportedBranch(String),

    #[error("No tags found. Please create a release tag first (like v0.1.0)")]
    NoStableTag,

    #[error("{0} must be set")]
    MissingCredential(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in track-bump
pub type Result<T> = std::result::Result<T, TrackBumpError>;

impl TrackBumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TrackBumpError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        TrackBumpError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        TrackBumpError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        TrackBumpError::Remote(msg.into())
    }
}
