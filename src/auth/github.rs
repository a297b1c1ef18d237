//! GitHub token lookup

use super::{AuthSource, CredentialSource, resolve_credential};
use crate::config::{CONFIG_KEY_GH_API_KEY, ConfigStore};
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Token file looked up in the home directory when git config has no token
pub const TOKEN_FILE_NAME: &str = ".pr-train";

/// GitHub authentication configuration
#[derive(Clone)]
pub struct GitHubAuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

impl std::fmt::Debug for GitHubAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuthConfig")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Sources tried for a GitHub token, in order.
///
/// `github.apiKey` from git config, then `<home>/.pr-train` when a home
/// directory is known.
pub fn default_github_sources(home: Option<&Path>) -> Vec<CredentialSource> {
    let mut sources = vec![CredentialSource::ConfigKey(
        CONFIG_KEY_GH_API_KEY.to_string(),
    )];
    if let Some(home) = home {
        sources.push(CredentialSource::File(home.join(TOKEN_FILE_NAME)));
    }
    sources
}

/// Get GitHub authentication from git config or the token file
pub async fn get_github_auth(store: &dyn ConfigStore) -> Result<GitHubAuthConfig> {
    let home: Option<PathBuf> = dirs::home_dir();
    let sources = default_github_sources(home.as_deref());
    let (token, source) = resolve_credential(store, &sources).await?;
    debug!(?source, "resolved GitHub auth");
    Ok(GitHubAuthConfig { token, source })
}

/// Instructions shown when no token could be found
pub fn missing_credential_message() -> String {
    format!(
        "Please run \"git config --global {CONFIG_KEY_GH_API_KEY} <Your GH API key>\" \
         to enable Canva Boy to access your pull requests data."
    )
}
