//! Error types for canvaboy

use thiserror::Error;

/// Errors that can occur while building release notes
#[derive(Debug, Error)]
pub enum Error {
    /// No API token in git config nor in the token file
    #[error("GitHub API key not found")]
    MissingCredential,

    /// The `git config` command failed for a reason other than a missing key
    #[error("git config error: {0}")]
    GitConfig(String),

    /// A configuration value could not be used
    #[error("configuration error: {0}")]
    Config(String),

    /// GitHub API returned something we could not use
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Error raised by the octocrab client
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// The interactive prompt failed
    #[error("prompt error: {0}")]
    Prompt(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
