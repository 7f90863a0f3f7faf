use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use crate::constants::DEFAULT_FPS;
use super::{Placement, SubtitleList};

/// Metadata of the video the session edits against.
///
/// The video itself lives with an external player; only the numbers the
/// editor needs are carried here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMeta {
    /// Native width in pixels (the design space)
    pub width: u32,
    /// Native height in pixels
    pub height: u32,
    /// Frame rate
    #[serde(default = "default_fps")]
    pub fps: f64,
    /// Duration in seconds
    pub duration_seconds: f64,
}

fn default_fps() -> f64 {
    DEFAULT_FPS
}

impl Default for VideoMeta {
    fn default() -> Self {
        Self {
            width: 1440,
            height: 1080,
            fps: DEFAULT_FPS,
            duration_seconds: 60.0,
        }
    }
}

/// The main editing session container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Schema version for future compatibility
    pub version: String,
    /// Session name
    pub name: String,
    /// Identity of the source video
    pub video_id: Uuid,
    /// Video metadata
    pub video: VideoMeta,
    /// All subtitle entries
    pub subtitles: SubtitleList,
    /// Shared caption box placement and style
    pub placement: Placement,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last commit timestamp
    pub modified_at: DateTime<Utc>,

    /// Path to the session folder (not serialized - set on load)
    #[serde(skip)]
    pub session_path: Option<PathBuf>,
}

impl Default for Session {
    fn default() -> Self {
        let video = VideoMeta::default();
        let placement = Placement::for_video(video.width as f64, video.height as f64);
        let now = Utc::now();
        Self {
            version: "1.0".to_string(),
            name: "Untitled Session".to_string(),
            video_id: Uuid::new_v4(),
            video,
            subtitles: SubtitleList::default(),
            placement,
            created_at: now,
            modified_at: now,
            session_path: None,
        }
    }
}

impl Session {
    /// Create a new session for a video
    pub fn new(name: impl Into<String>, video: VideoMeta) -> Self {
        let placement = Placement::for_video(video.width as f64, video.height as f64);
        Self {
            name: name.into(),
            video,
            placement,
            ..Default::default()
        }
    }

    /// Total playable duration in seconds
    pub fn duration(&self) -> f64 {
        self.video.duration_seconds.max(0.0)
    }

    /// Frame rate, floored at one frame per second
    pub fn fps(&self) -> f64 {
        self.video.fps.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Subtitle;

    #[test]
    fn test_default_session() {
        let session = Session::default();
        assert!(session.subtitles.is_empty());
        assert_eq!(session.fps(), DEFAULT_FPS);
    }

    #[test]
    fn test_new_session_derives_placement_from_video() {
        let video = VideoMeta {
            width: 1920,
            height: 1080,
            fps: 24.0,
            duration_seconds: 30.0,
        };
        let session = Session::new("clip", video);
        assert_eq!(session.placement.width, 1920.0 * 0.8);
        assert_eq!(session.placement.top, 1080.0 * 0.8);
        assert_eq!(session.duration(), 30.0);
    }

    #[test]
    fn test_session_serialization() {
        let mut session = Session::new("roundtrip", VideoMeta::default());
        session.subtitles = SubtitleList::from_entries(vec![Subtitle::new(0, 0.0, 2.0, "hi")]);
        let json = serde_json::to_string_pretty(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, session.name);
        assert_eq!(parsed.subtitles, session.subtitles);
        assert_eq!(parsed.placement, session.placement);
    }
}
