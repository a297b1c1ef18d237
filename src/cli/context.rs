//! Shared setup for the notes command
//!
//! Resolves everything that comes from local configuration before any
//! network call is made.

use canvaboy::auth::{AuthSource, get_github_auth};
use canvaboy::config::{GitConfigStore, resolve_org_repo, resolve_user_name};
use canvaboy::error::Result;
use canvaboy::platform::{GitHubService, PlatformService};
use canvaboy::types::RepoSlug;
use tracing::debug;

/// Everything the notes command needs before talking to GitHub
pub struct CommandContext {
    /// Platform service (GitHub)
    pub platform: Box<dyn PlatformService>,
    /// Where the API token came from
    pub auth_source: AuthSource,
    /// Repository to search
    pub repo: RepoSlug,
    /// Prefix for release-note lines (`git config user.name`)
    pub user_name: String,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// - Resolve the API token (git config, then `~/.pr-train`)
    /// - Create the GitHub service
    /// - Resolve the repository and the user name
    pub async fn new(repo_override: Option<&str>, host: Option<&str>) -> Result<Self> {
        let store = GitConfigStore::global();

        let auth = get_github_auth(&store).await?;
        let platform = GitHubService::new(&auth.token, host)?;

        let repo = resolve_org_repo(&store, repo_override).await?;
        let user_name = resolve_user_name(&store).await?;
        debug!(%repo, source = ?auth.source, "command context ready");

        Ok(Self {
            platform: Box::new(platform),
            auth_source: auth.source,
            repo,
            user_name,
        })
    }
}
