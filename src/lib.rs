//! canvaboy - release notes from your merged pull requests
//!
//! This library holds the pieces behind the `canvaboy` binary:
//! - resolving settings and the API credential from the global git config
//! - querying GitHub for the caller's merged pull requests
//! - ordering and rendering them as checklist choices
//! - turning the user's selection into release-note lines
//!
//! Every effectful step sits behind a trait ([`config::ConfigStore`],
//! [`platform::PlatformService`], [`prompt::ChecklistPrompter`]) so the
//! pipeline can be driven from tests without git, network or a terminal.

pub mod auth;
pub mod config;
pub mod error;
pub mod notes;
pub mod pipeline;
pub mod platform;
pub mod prompt;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
