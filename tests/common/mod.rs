//! Shared test helpers

pub mod mock_platform;

#[allow(unused_imports)]
pub use mock_platform::{
    MockPlatformService, RecordingProgress, ScriptedPrompter, SearchCall, make_pr, now,
};
