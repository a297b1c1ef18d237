//! Interactive checklist selection

use crate::error::{Error, Result};
use crate::types::ReleaseNoteChoice;
use dialoguer::{MultiSelect, theme::ColorfulTheme};

/// Rows shown at once before the checklist starts scrolling
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Prompt shown above the release-note checklist
pub const CHECKLIST_PROMPT: &str = "Select pull requests for the release notes";

/// Abstraction over a multi-select checklist prompt.
///
/// Decouples the pipeline from the terminal so selection can be scripted in
/// tests.
pub trait ChecklistPrompter {
    /// Show `items` as a checklist and return the indexes the user ticked.
    ///
    /// # Parameters
    /// - `prompt`: The message shown above the list.
    /// - `items`: The labels, in display order.
    /// - `page_size`: How many rows are visible at once.
    fn select(&mut self, prompt: &str, items: &[String], page_size: usize) -> Result<Vec<usize>>;
}

/// Default implementation of `ChecklistPrompter` using `dialoguer::MultiSelect`.
///
/// Uses the `ColorfulTheme` for user-friendly styling.
pub struct DialoguerChecklistPrompter;

impl ChecklistPrompter for DialoguerChecklistPrompter {
    fn select(&mut self, prompt: &str, items: &[String], page_size: usize) -> Result<Vec<usize>> {
        let theme = ColorfulTheme::default();
        MultiSelect::with_theme(&theme)
            .with_prompt(prompt)
            .items(items)
            .max_length(page_size)
            .interact()
            .map_err(|e| Error::Prompt(format!("failed to read selection: {e}")))
    }
}

/// Ask the user which choices go into the release notes.
///
/// Shows each choice's label and returns the matching values, in display
/// order. An empty list of choices returns an empty selection without
/// prompting.
pub fn choose_release_notes<P: ChecklistPrompter + ?Sized>(
    prompter: &mut P,
    choices: &[ReleaseNoteChoice],
    page_size: usize,
) -> Result<Vec<String>> {
    if choices.is_empty() {
        return Ok(Vec::new());
    }

    let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let mut picked = prompter.select(CHECKLIST_PROMPT, &labels, page_size.max(1))?;
    picked.sort_unstable();
    picked.dedup();

    picked
        .into_iter()
        .map(|i| {
            choices
                .get(i)
                .map(|c| c.value.clone())
                .ok_or_else(|| Error::Prompt(format!("selection index {i} out of range")))
        })
        .collect()
}
