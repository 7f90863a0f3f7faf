//! Timeline panel
//!
//! The zoomable timeline strip: marker row, subtitle bars with boundary
//! handles, playhead, and playback controls. All window math lives in
//! `core::timeline`; these components only render the current view and
//! forward pointer-down events up to the app, which owns the active
//! drag session.

mod panel;
mod playback_controls;
mod ruler;
mod subtitle_bar;

pub use panel::TimelinePanel;
