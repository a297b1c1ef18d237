//! Authentication for GitHub
//!
//! The API token is looked up through an ordered list of
//! [`CredentialSource`]s: git config first, then a plain-text token file.
//! The first source that yields a token wins.

mod github;

pub use github::{
    GitHubAuthConfig, TOKEN_FILE_NAME, default_github_sources, get_github_auth,
    missing_credential_message,
};

use crate::config::{ConfigStore, non_empty};
use crate::error::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from a git config key
    GitConfig,
    /// Token from a plain-text file
    TokenFile,
}

/// One strategy for finding a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Read a key from the config store
    ConfigKey(String),
    /// Read the whole contents of a file
    File(PathBuf),
}

impl CredentialSource {
    /// Which kind of source this is
    pub const fn auth_source(&self) -> AuthSource {
        match self {
            Self::ConfigKey(_) => AuthSource::GitConfig,
            Self::File(_) => AuthSource::TokenFile,
        }
    }

    /// Try this source.
    ///
    /// Returns `Ok(None)` when the source has no token. A file that is
    /// missing or unreadable counts as having no token; config store
    /// failures are returned as errors.
    pub async fn lookup(&self, store: &dyn ConfigStore) -> Result<Option<String>> {
        match self {
            Self::ConfigKey(key) => store.get(key).await,
            Self::File(path) => match tokio::fs::read_to_string(path).await {
                Ok(contents) => Ok(non_empty(contents.trim().to_string())),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "token file not readable");
                    Ok(None)
                }
            },
        }
    }
}

/// Walk `sources` in order and return the first token found.
///
/// Returns [`Error::MissingCredential`] when every source comes up empty.
pub async fn resolve_credential(
    store: &dyn ConfigStore,
    sources: &[CredentialSource],
) -> Result<(String, AuthSource)> {
    for source in sources {
        if let Some(token) = source.lookup(store).await? {
            debug!(source = ?source.auth_source(), "found API token");
            return Ok((token, source.auth_source()));
        }
    }
    debug!(tried = sources.len(), "no API token found");
    Err(Error::MissingCredential)
}
