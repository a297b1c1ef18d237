//! Platform services for GitHub
//!
//! Provides the two remote calls release notes need: who am I, and which of
//! my pull requests were merged.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{PullRequestSummary, RepoSlug};
use async_trait::async_trait;

/// Results requested per search page
pub const SEARCH_PAGE_SIZE: u8 = 100;

/// Platform service trait for the remote calls
///
/// This trait abstracts the GitHub API, allowing the release-note pipeline
/// to run against a mock in tests.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Login of the authenticated user
    async fn current_login(&self) -> Result<String>;

    /// Merged pull requests authored by `author` in `repo`.
    ///
    /// Results come back most recently updated first. Only the first page of
    /// search results is returned.
    async fn search_merged_prs(
        &self,
        repo: &RepoSlug,
        author: &str,
    ) -> Result<Vec<PullRequestSummary>>;
}

/// Build the search query for merged PRs by `author` in `repo`.
///
/// Qualifiers are space separated; form encoding turns the spaces into `+`.
pub fn merged_pr_query(repo: &RepoSlug, author: &str) -> String {
    format!("repo:{repo} type:pr is:merged author:{author}")
}
