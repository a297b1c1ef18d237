//! Release-note rendering
//!
//! Pure functions only: ordering search results, turning them into
//! checklist choices, and formatting the final lines. No I/O happens here,
//! so the current time is passed in by the caller.

mod relative_time;
mod render;

pub use relative_time::relative_time;
pub use render::{
    choice_for, format_release_notes, order_by_closed_desc, release_note_value, render_choices,
};
