//! Settings read from the user's git configuration
//!
//! canvaboy keeps its settings next to the user's git identity, in the
//! global git config. Values are read through the [`ConfigStore`] trait so
//! callers (and tests) can swap the backing store.

use crate::error::{Error, Result};
use crate::types::RepoSlug;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Key holding the `owner/repo` to collect pull requests from
pub const CONFIG_KEY_ORG_REPO: &str = "canvaboy.orgRepo";

/// Key holding the GitHub API token
pub const CONFIG_KEY_GH_API_KEY: &str = "github.apiKey";

/// Key holding the name that prefixes every release-note line
pub const CONFIG_KEY_USER_NAME: &str = "user.name";

/// Repository used when `canvaboy.orgRepo` is not set
pub const DEFAULT_ORG_REPO: &str = "Canva/canva";

/// Read-only key/value configuration store
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Look up a dotted key.
    ///
    /// Returns the value with surrounding whitespace removed, or `None` when
    /// the key is absent or holds only whitespace.
    async fn get(&self, key: &str) -> Result<Option<String>>;
}

/// Which git config file to read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitConfigScope {
    /// The user's global config (`git config --global`)
    Global,
    /// An explicit config file (`git config --file <path>`)
    File(PathBuf),
}

/// [`ConfigStore`] backed by the `git config` command
#[derive(Debug, Clone)]
pub struct GitConfigStore {
    scope: GitConfigScope,
}

impl GitConfigStore {
    /// Store reading the global git config
    pub const fn global() -> Self {
        Self {
            scope: GitConfigScope::Global,
        }
    }

    /// Store reading a specific git config file
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            scope: GitConfigScope::File(path.into()),
        }
    }

    /// The scope this store reads from
    pub const fn scope(&self) -> &GitConfigScope {
        &self.scope
    }
}

#[async_trait]
impl ConfigStore for GitConfigStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut cmd = Command::new("git");
        cmd.arg("config");
        match &self.scope {
            GitConfigScope::Global => {
                cmd.arg("--global");
            }
            GitConfigScope::File(path) => {
                cmd.arg("--file").arg(path);
            }
        }
        cmd.arg("--get").arg(key);
        cmd.stdin(Stdio::null());

        let output = cmd
            .output()
            .await
            .map_err(|e| Error::GitConfig(format!("failed to run git: {e}")))?;

        // Exit status 1 is how git reports a missing key
        if output.status.code() == Some(1) {
            debug!(key, "git config key not set");
            return Ok(None);
        }
        if !output.status.success() {
            return Err(Error::GitConfig(format!(
                "git config --get {key} failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(key, found = !value.is_empty(), "read git config key");
        Ok(non_empty(value))
    }
}

/// Turn an already trimmed value into `None` when it is empty
pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Resolve the repository to search.
///
/// An explicit override wins, then `canvaboy.orgRepo`, then
/// [`DEFAULT_ORG_REPO`].
pub async fn resolve_org_repo(
    store: &dyn ConfigStore,
    override_repo: Option<&str>,
) -> Result<RepoSlug> {
    let (raw, hint) = match override_repo.map(str::trim).filter(|r| !r.is_empty()) {
        Some(repo) => (repo.to_string(), "pass --repo <owner/repo>".to_string()),
        None => (
            store
                .get(CONFIG_KEY_ORG_REPO)
                .await?
                .unwrap_or_else(|| DEFAULT_ORG_REPO.to_string()),
            format!("run \"git config --global {CONFIG_KEY_ORG_REPO} <owner/repo>\""),
        ),
    };
    debug!(repo = %raw, "resolved repository");
    raw.parse().map_err(|_| {
        Error::Config(format!(
            "invalid repository '{raw}', expected owner/repo; {hint}"
        ))
    })
}

/// Resolve the display name used as the release-note prefix.
///
/// Returns an empty string when `user.name` is not set.
pub async fn resolve_user_name(store: &dyn ConfigStore) -> Result<String> {
    Ok(store.get(CONFIG_KEY_USER_NAME).await?.unwrap_or_default())
}


#[cfg(test)]
mod tests {
    use super::testing::MemoryConfigStore;
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_org_repo_defaults_when_unset() {
        let store = MemoryConfigStore::default();
        let repo = resolve_org_repo(&store, None).await.unwrap();
        assert_eq!(repo.to_string(), DEFAULT_ORG_REPO);
    }

    #[tokio::test]
    async fn test_org_repo_defaults_when_blank() {
        let store = MemoryConfigStore::default().with(CONFIG_KEY_ORG_REPO, "   ");
        let repo = resolve_org_repo(&store, None).await.unwrap();
        assert_eq!(repo.to_string(), "Canva/canva");
    }

    #[tokio::test]
    async fn test_org_repo_from_config_is_trimmed() {
        let store = MemoryConfigStore::default().with(CONFIG_KEY_ORG_REPO, "  acme/widgets\n");
        let repo = resolve_org_repo(&store, None).await.unwrap();
        assert_eq!(repo.owner, "acme");
        assert_eq!(repo.repo, "widgets");
    }

    #[tokio::test]
    async fn test_org_repo_override_wins() {
        let store = MemoryConfigStore::default().with(CONFIG_KEY_ORG_REPO, "acme/widgets");
        let repo = resolve_org_repo(&store, Some("other/thing")).await.unwrap();
        assert_eq!(repo.to_string(), "other/thing");
    }

    #[tokio::test]
    async fn test_org_repo_invalid_value_is_config_error() {
        let store = MemoryConfigStore::default().with(CONFIG_KEY_ORG_REPO, "  Canva  ");
        match resolve_org_repo(&store, None).await {
            Err(Error::Config(msg)) => {
                assert!(msg.contains("'Canva'"), "unexpected message: {msg}");
                assert!(
                    msg.contains("git config --global canvaboy.orgRepo"),
                    "unexpected message: {msg}"
                );
            }
            other => panic!("Expected Config error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_org_repo_invalid_override_points_at_flag() {
        let store = MemoryConfigStore::default();
        match resolve_org_repo(&store, Some("widgets")).await {
            Err(Error::Config(msg)) => assert!(msg.contains("--repo"), "unexpected message: {msg}"),
            other => panic!("Expected Config error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_user_name_trimmed_or_empty() {
        let store = MemoryConfigStore::default().with(CONFIG_KEY_USER_NAME, "  Jane Doe \n");
        assert_eq!(resolve_user_name(&store).await.unwrap(), "Jane Doe");

        let empty = MemoryConfigStore::default();
        assert_eq!(resolve_user_name(&empty).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let store = MemoryConfigStore::failing();
        assert!(matches!(
            resolve_user_name(&store).await,
            Err(Error::GitConfig(_))
        ));
    }

    #[tokio::test]
    async fn test_git_config_store_reads_file_scope() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[user]\n\tname = \"  Jane Doe  \"\n[canvaboy]\n\torgRepo = acme/widgets"
        )
        .unwrap();

        let store = GitConfigStore::with_file(file.path());
        assert_eq!(
            store.scope(),
            &GitConfigScope::File(file.path().to_path_buf())
        );
        assert_eq!(GitConfigStore::global().scope(), &GitConfigScope::Global);
        assert_eq!(
            store.get(CONFIG_KEY_USER_NAME).await.unwrap().as_deref(),
            Some("Jane Doe")
        );
        assert_eq!(
            store.get(CONFIG_KEY_ORG_REPO).await.unwrap().as_deref(),
            Some("acme/widgets")
        );
        assert_eq!(store.get(CONFIG_KEY_GH_API_KEY).await.unwrap(), None);
    }
}
