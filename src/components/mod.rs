//! UI components grouped by feature domain.

mod overlay_box;
mod preview_panel;
mod subtitle_text;
mod transcript_panel;

pub use preview_panel::PreviewPanel;
pub use transcript_panel::TranscriptPanel;
