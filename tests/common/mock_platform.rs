//! Mock platform service, prompter and progress for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use canvaboy::error::{Error, Result};
use canvaboy::pipeline::ProgressCallback;
use canvaboy::platform::PlatformService;
use canvaboy::prompt::ChecklistPrompter;
use canvaboy::types::{PullRequestSummary, RepoSlug};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Mutex;

/// Fixed reference instant for relative-time labels
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Build a merged PR closed `closed_days_ago` days before [`now`]
pub fn make_pr(number: u64, title: &str, closed_days_ago: i64) -> PullRequestSummary {
    let closed_at = now() - Duration::days(closed_days_ago);
    PullRequestSummary {
        number,
        title: title.to_string(),
        created_at: closed_at - Duration::days(1),
        updated_at: closed_at,
        closed_at,
        author_login: "octocat".to_string(),
    }
}

/// Call record for `search_merged_prs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCall {
    pub repo: String,
    pub author: String,
}

/// Simple mock platform service for testing
///
/// Features:
/// - Configurable login and search results
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    login: String,
    search_results: Mutex<Vec<PullRequestSummary>>,
    // Call tracking
    login_calls: Mutex<usize>,
    search_calls: Mutex<Vec<SearchCall>>,
    // Error injection
    error_on_login: Mutex<Option<String>>,
    error_on_search: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock authenticated as `login`
    pub fn with_login(login: &str) -> Self {
        Self {
            login: login.to_string(),
            search_results: Mutex::new(Vec::new()),
            login_calls: Mutex::new(0),
            search_calls: Mutex::new(Vec::new()),
            error_on_login: Mutex::new(None),
            error_on_search: Mutex::new(None),
        }
    }

    /// Set the PRs returned by `search_merged_prs`
    pub fn set_search_results(&self, prs: Vec<PullRequestSummary>) {
        *self.search_results.lock().unwrap() = prs;
    }

    /// Make `current_login` return an error
    pub fn fail_login(&self, msg: &str) {
        *self.error_on_login.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `search_merged_prs` return an error
    pub fn fail_search(&self, msg: &str) {
        *self.error_on_search.lock().unwrap() = Some(msg.to_string());
    }

    /// Number of `current_login` calls
    pub fn login_call_count(&self) -> usize {
        *self.login_calls.lock().unwrap()
    }

    /// All `search_merged_prs` calls
    pub fn get_search_calls(&self) -> Vec<SearchCall> {
        self.search_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn current_login(&self) -> Result<String> {
        *self.login_calls.lock().unwrap() += 1;

        if let Some(msg) = self.error_on_login.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }
        Ok(self.login.clone())
    }

    async fn search_merged_prs(
        &self,
        repo: &RepoSlug,
        author: &str,
    ) -> Result<Vec<PullRequestSummary>> {
        self.search_calls.lock().unwrap().push(SearchCall {
            repo: repo.to_string(),
            author: author.to_string(),
        });

        if let Some(msg) = self.error_on_search.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }
        Ok(self.search_results.lock().unwrap().clone())
    }
}

/// Prompter that answers with a fixed selection
pub struct ScriptedPrompter {
    answer: Vec<usize>,
    fail_with: Option<String>,
    /// Labels shown on each call
    pub shown: Vec<Vec<String>>,
    /// Page size passed on each call
    pub page_sizes: Vec<usize>,
}

impl ScriptedPrompter {
    /// Tick the given indexes
    pub fn selecting(answer: &[usize]) -> Self {
        Self {
            answer: answer.to_vec(),
            fail_with: None,
            shown: Vec::new(),
            page_sizes: Vec::new(),
        }
    }

    /// Fail every prompt
    pub fn failing(msg: &str) -> Self {
        Self {
            answer: Vec::new(),
            fail_with: Some(msg.to_string()),
            shown: Vec::new(),
            page_sizes: Vec::new(),
        }
    }

    /// Number of times the checklist was shown
    pub fn call_count(&self) -> usize {
        self.shown.len()
    }
}

impl ChecklistPrompter for ScriptedPrompter {
    fn select(&mut self, _prompt: &str, items: &[String], page_size: usize) -> Result<Vec<usize>> {
        self.shown.push(items.to_vec());
        self.page_sizes.push(page_size);
        match &self.fail_with {
            Some(msg) => Err(Error::Prompt(msg.clone())),
            None => Ok(self.answer.clone()),
        }
    }
}

/// Progress callback that records every event
#[derive(Default)]
pub struct RecordingProgress {
    pub events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_login_resolved(&self, login: &str) {
        self.events.lock().unwrap().push(format!("login:{login}"));
    }

    async fn on_search_started(&self, repo: &RepoSlug, login: &str) {
        self.events
            .lock()
            .unwrap()
            .push(format!("search:{repo}:{login}"));
    }

    async fn on_search_finished(&self, count: usize) {
        self.events.lock().unwrap().push(format!("found:{count}"));
    }
}
