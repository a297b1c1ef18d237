//! Core types for canvaboy

use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::str::FromStr;

/// A merged pull request as returned by the search API
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PullRequestSummary {
    /// PR number
    pub number: u64,
    /// PR title, untrimmed
    pub title: String,
    /// When the PR was opened
    pub created_at: DateTime<Utc>,
    /// When the PR was last updated
    pub updated_at: DateTime<Utc>,
    /// When the PR was closed (merged)
    pub closed_at: DateTime<Utc>,
    /// Login of the PR author
    pub author_login: String,
}

/// One entry of the release-note checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNoteChoice {
    /// Text that ends up in the release notes, e.g. `Fix login (#42)`
    pub value: String,
    /// Text shown in the checklist, the value plus how long ago it closed
    pub label: String,
}

/// Repository identifier in `owner/repo` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl FromStr for RepoSlug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(Error::Config(format!(
                "invalid repository '{trimmed}', expected owner/repo"
            ))),
        }
    }
}

impl std::fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
