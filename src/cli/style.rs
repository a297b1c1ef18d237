//! Terminal styling helpers

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark used for completed steps
pub const CHECK: &str = "✓";

/// Semantic colors for CLI output
pub trait Stylize {
    /// De-emphasized text (hints, notices)
    fn muted(&self) -> String;
    /// Bold text
    fn emphasis(&self) -> String;
    /// Highlighted values (names, counts)
    fn accent(&self) -> String;
    /// Error labels
    fn error(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn error(&self) -> String {
        self.red().bold().to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    CHECK.green().to_string()
}

/// Spinner style shared by long-running steps
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
