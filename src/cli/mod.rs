//! CLI command implementations

mod context;
mod notes;
pub mod style;

pub use notes::{NotesOptions, run_notes};

use anstream::eprintln;
use async_trait::async_trait;
use canvaboy::pipeline::ProgressCallback;
use canvaboy::types::RepoSlug;
use indicatif::ProgressBar;
use std::sync::Mutex;
use std::time::Duration;
use style::{Stylize, check, spinner_style};

/// Progress reporting on stderr, keeping stdout for the release notes
#[derive(Default)]
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl Drop for CliProgress {
    // A failed search never reaches on_search_finished
    fn drop(&mut self) {
        if let Ok(slot) = self.spinner.get_mut()
            && let Some(spinner) = slot.take()
        {
            spinner.finish_and_clear();
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_login_resolved(&self, login: &str) {
        eprintln!("{} {}", "GitHub nick:".muted(), login.accent());
    }

    async fn on_search_started(&self, repo: &RepoSlug, login: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(format!(
            "Searching merged PRs by {} in {}...",
            login.emphasis(),
            repo.emphasis()
        ));
        spinner.enable_steady_tick(Duration::from_millis(80));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(spinner);
        }
    }

    async fn on_search_finished(&self, count: usize) {
        let spinner = self.spinner.lock().ok().and_then(|mut slot| slot.take());
        if let Some(spinner) = spinner {
            spinner.finish_with_message(format!(
                "{} Found {} merged PR(s)",
                check(),
                count.accent()
            ));
        }
    }
}
