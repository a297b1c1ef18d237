//! Ordering, rendering and formatting of release-note entries

use super::relative_time;
use crate::types::{PullRequestSummary, ReleaseNoteChoice};
use chrono::{DateTime, Utc};

/// Order pull requests most recently closed first.
///
/// This is a stable ascending sort on `closed_at` followed by a reversal, so
/// PRs closed at the same instant come out in the reverse of their input
/// order.
pub fn order_by_closed_desc(mut prs: Vec<PullRequestSummary>) -> Vec<PullRequestSummary> {
    prs.sort_by_key(|pr| pr.closed_at);
    prs.reverse();
    prs
}

/// The release-note text for a PR: trimmed title plus `(#number)`
pub fn release_note_value(pr: &PullRequestSummary) -> String {
    format!("{} (#{})", pr.title.trim(), pr.number)
}

/// Build the checklist entry for a PR
pub fn choice_for(pr: &PullRequestSummary, now: DateTime<Utc>) -> ReleaseNoteChoice {
    let value = release_note_value(pr);
    let label = format!("{value} closed: {}", relative_time(pr.closed_at, now));
    ReleaseNoteChoice { value, label }
}

/// Order PRs and turn them into checklist choices
pub fn render_choices(prs: Vec<PullRequestSummary>, now: DateTime<Utc>) -> Vec<ReleaseNoteChoice> {
    order_by_closed_desc(prs)
        .iter()
        .map(|pr| choice_for(pr, now))
        .collect()
}

/// Prefix every selected value with `<user_name>: ` and join with newlines
pub fn format_release_notes(user_name: &str, selected: &[String]) -> String {
    selected
        .iter()
        .map(|line| format!("{user_name}: {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
