//! Custom error types for relmake with improved type safety and error handling.

use thiserror::Error;

/// Main error type for relmake operations.
#[derive(Error, Debug)]
pub enum RelmakeError {
    // Release gate errors
    #[error(
        "no release version given: usage `relmake release <VERSION>` (e.g. `relmake release 1.2.3`)"
    )]
    BlankVersion,

    #[error(
        "version {version} is not documented in {changelog}: add a changelog entry before releasing"
    )]
    VersionNotDocumented { version: String, changelog: String },

    #[error(
        "version {version} is still marked unreleased in {changelog} (found \"{line}\"): finalize the changelog entry before releasing"
    )]
    VersionUnreleased {
        version: String,
        changelog: String,
        line: String,
    },

    // Pipeline errors
    #[error("{program} exited with {status}")]
    StepFailed {
        program: String,
        status: std::process::ExitStatus,
    },

    #[error("nothing to upload: {0} contains no distribution files")]
    EmptyDistDir(String),

    // Version/parsing errors - automatic conversions via #[from]
    #[error("Invalid version format: {0}")]
    InvalidVersion(#[from] semver::Error),

    #[error("Git operation failed: {0}")]
    GitError(#[from] git2::Error),

    #[error("Regular expression error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using RelmakeError
pub type Result<T> = std::result::Result<T, RelmakeError>;

impl RelmakeError {
    /// Create a not-documented gate error
    pub fn not_documented(
        version: impl Into<String>,
        changelog: impl Into<String>,
    ) -> Self {
        Self::VersionNotDocumented {
            version: version.into(),
            changelog: changelog.into(),
        }
    }

    /// Create an unreleased-entry gate error
    pub fn unreleased(
        version: impl Into<String>,
        changelog: impl Into<String>,
        line: impl Into<String>,
    ) -> Self {
        Self::VersionUnreleased {
            version: version.into(),
            changelog: changelog.into(),
            line: line.into(),
        }
    }
}

// Implement From for std::io::Error - wraps in Other variant for generic I/O errors
impl From<std::io::Error> for RelmakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}
