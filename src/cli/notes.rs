//! Notes command - pick merged PRs and print release-note lines

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use crate::cli::style::Stylize;
use anstream::{eprintln, println};
use canvaboy::error::Result;
use canvaboy::pipeline::{NotesRequest, generate_release_notes};
use canvaboy::prompt::DialoguerChecklistPrompter;
use chrono::Utc;
use tracing::debug;

/// Options for the notes command
#[derive(Debug, Clone, Default)]
pub struct NotesOptions {
    /// Repository override (`owner/repo`)
    pub repo: Option<String>,
    /// GitHub Enterprise host
    pub host: Option<String>,
    /// Checklist rows visible at once
    pub page_size: usize,
}

/// Run the notes command
#[allow(clippy::future_not_send)]
pub async fn run_notes(options: NotesOptions) -> Result<()> {
    let ctx = CommandContext::new(options.repo.as_deref(), options.host.as_deref()).await?;
    debug!(source = ?ctx.auth_source, "using GitHub token");

    let request = NotesRequest {
        repo: ctx.repo.clone(),
        user_name: ctx.user_name.clone(),
        page_size: options.page_size,
        now: Utc::now(),
    };

    let progress = CliProgress::default();
    let mut prompter = DialoguerChecklistPrompter;
    let notes = generate_release_notes(
        ctx.platform.as_ref(),
        &mut prompter,
        &progress,
        &request,
    )
    .await?;

    if notes.choices.is_empty() {
        eprintln!(
            "{}",
            format!("No merged pull requests by {} in {}", notes.login, request.repo).muted()
        );
    }

    println!("{}", notes.output);
    Ok(())
}
