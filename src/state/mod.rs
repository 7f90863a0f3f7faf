//! State management module
//!
//! This module contains the core data structures for the application:
//! - Session: the top-level container for one editing session
//! - Subtitle / SubtitleList: timed caption entries with adjacency queries
//! - Placement: the shared caption box geometry and text style

mod subtitle;
mod placement;
mod session;
mod persistence;

pub use subtitle::*;
pub use placement::*;
pub use session::*;
pub use persistence::*;
