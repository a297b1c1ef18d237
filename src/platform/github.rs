//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::{PlatformService, SEARCH_PAGE_SIZE, merged_pr_query};
use crate::types::{PullRequestSummary, RepoSlug};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

// REST response types, trimmed to the fields we read

#[derive(Deserialize)]
struct AuthenticatedUser {
    login: String,
}

#[derive(Deserialize)]
struct IssueSearchResponse {
    total_count: u64,
    #[serde(default)]
    incomplete_results: bool,
    items: Vec<IssueSearchItem>,
}

#[derive(Deserialize)]
struct IssueSearchItem {
    number: u64,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    closed_at: DateTime<Utc>,
    user: SearchUser,
}

#[derive(Deserialize)]
struct SearchUser {
    login: String,
}

impl From<IssueSearchItem> for PullRequestSummary {
    fn from(item: IssueSearchItem) -> Self {
        Self {
            number: item.number,
            title: item.title,
            created_at: item.created_at,
            updated_at: item.updated_at,
            closed_at: item.closed_at,
            author_login: item.user.login,
        }
    }
}

#[derive(Serialize)]
struct IssueSearchParams<'a> {
    q: &'a str,
    sort: &'a str,
    order: &'a str,
    per_page: u8,
}

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
}

impl GitHubService {
    /// Create a new GitHub service.
    ///
    /// `host` selects a GitHub Enterprise instance (`https://<host>/api/v3`);
    /// `None` talks to api.github.com.
    pub fn new(token: &str, host: Option<&str>) -> Result<Self> {
        let base_uri = host
            .map(|h| {
                Url::parse(&format!("https://{h}/api/v3"))
                    .map_err(|e| Error::Config(format!("invalid GitHub host '{h}': {e}")))
            })
            .transpose()?;
        Self::connect(token, base_uri.as_ref().map(Url::as_str))
    }

    /// Create a service against an explicit API base URI
    pub fn with_base_uri(token: &str, base_uri: &str) -> Result<Self> {
        Self::connect(token, Some(base_uri))
    }

    fn connect(token: &str, base_uri: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(uri) = base_uri {
            debug!(base_uri = uri, "using custom GitHub API base");
            builder = builder
                .base_uri(uri)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn current_login(&self) -> Result<String> {
        debug!("fetching authenticated user");
        let user: AuthenticatedUser = self.client.get("/user", None::<&()>).await?;
        debug!(login = %user.login, "fetched authenticated user");
        Ok(user.login)
    }

    async fn search_merged_prs(
        &self,
        repo: &RepoSlug,
        author: &str,
    ) -> Result<Vec<PullRequestSummary>> {
        let query = merged_pr_query(repo, author);
        debug!(%query, "searching merged PRs");

        let params = IssueSearchParams {
            q: &query,
            sort: "updated",
            order: "desc",
            per_page: SEARCH_PAGE_SIZE,
        };
        let response: IssueSearchResponse =
            self.client.get("/search/issues", Some(&params)).await?;

        if response.incomplete_results {
            debug!("search results flagged incomplete by GitHub");
        }
        if response.total_count > response.items.len() as u64 {
            debug!(
                total = response.total_count,
                returned = response.items.len(),
                "only the first page of search results is used"
            );
        }

        let prs: Vec<PullRequestSummary> = response.items.into_iter().map(Into::into).collect();
        debug!(count = prs.len(), "found merged PRs");
        Ok(prs)
    }
}
