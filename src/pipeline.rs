//! Release-note pipeline
//!
//! Runs the steps in order, each one consuming the previous result:
//! 1. Identify - resolve the authenticated login
//! 2. Search - fetch merged PRs for the repository
//! 3. Render - order and label them (pure)
//! 4. Select - ask the user which ones to keep
//! 5. Format - build the release-note text (pure)
//!
//! Any step failing stops the pipeline with that step's error.

use crate::error::Result;
use crate::notes::{format_release_notes, render_choices};
use crate::platform::PlatformService;
use crate::prompt::{ChecklistPrompter, choose_release_notes};
use crate::types::{ReleaseNoteChoice, RepoSlug};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Progress callback for status updates while the pipeline runs
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// The authenticated login is known
    async fn on_login_resolved(&self, login: &str);

    /// The search request is about to be sent
    async fn on_search_started(&self, repo: &RepoSlug, login: &str);

    /// The search request returned `count` pull requests
    async fn on_search_finished(&self, count: usize);
}

/// Progress callback that ignores every update
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_login_resolved(&self, _login: &str) {}

    async fn on_search_started(&self, _repo: &RepoSlug, _login: &str) {}

    async fn on_search_finished(&self, _count: usize) {}
}

/// Inputs for one pipeline run
#[derive(Debug, Clone)]
pub struct NotesRequest {
    /// Repository to search
    pub repo: RepoSlug,
    /// Prefix for every release-note line
    pub user_name: String,
    /// Checklist rows visible at once
    pub page_size: usize,
    /// Reference instant for "closed N ago" labels
    pub now: DateTime<Utc>,
}

/// Everything a pipeline run produced
#[derive(Debug, Clone)]
pub struct ReleaseNotes {
    /// Authenticated login the search was made for
    pub login: String,
    /// Choices shown to the user, in display order
    pub choices: Vec<ReleaseNoteChoice>,
    /// Values the user picked
    pub selected: Vec<String>,
    /// Final text, one line per selected value
    pub output: String,
}

/// Run the whole pipeline against a platform and a prompter
#[allow(clippy::future_not_send)]
pub async fn generate_release_notes(
    platform: &dyn PlatformService,
    prompter: &mut dyn ChecklistPrompter,
    progress: &dyn ProgressCallback,
    request: &NotesRequest,
) -> Result<ReleaseNotes> {
    let login = platform.current_login().await?;
    info!(%login, "authenticated");
    progress.on_login_resolved(&login).await;

    progress.on_search_started(&request.repo, &login).await;
    let prs = platform.search_merged_prs(&request.repo, &login).await?;
    progress.on_search_finished(prs.len()).await;

    let choices = render_choices(prs, request.now);
    debug!(count = choices.len(), "rendered choices");

    let selected = choose_release_notes(prompter, &choices, request.page_size)?;
    debug!(count = selected.len(), "user selection");

    let output = format_release_notes(&request.user_name, &selected);

    Ok(ReleaseNotes {
        login,
        choices,
        selected,
        output,
    })
}
