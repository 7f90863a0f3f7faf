use serde::{Deserialize, Serialize};

/// Per-word reveal behavior for the caption overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationMode {
    /// Words render statically
    #[default]
    None,
    /// Exactly one word is lit at a time, reverting after its window
    Highlight,
    /// Revealed words accumulate and stay visible
    Karaoke,
}

/// Position, size, and text style of the caption box in design space.
///
/// A single placement is shared by every subtitle in the session; moving
/// or restyling the box applies to all captions at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Box width in design-space pixels
    pub width: f64,
    /// Box height in design-space pixels
    pub height: f64,
    /// Left edge in design-space pixels
    pub left: f64,
    /// Top edge in design-space pixels
    pub top: f64,
    /// Font family name
    pub font_family: String,
    /// Font size in design-space pixels
    pub font_size: f64,
    /// Text color (hex string)
    pub color: String,
    /// Italic text
    pub italic: bool,
    /// Named style template applied to words
    #[serde(default = "default_style_id")]
    pub style_id: String,
    /// Word reveal behavior
    #[serde(default)]
    pub animation: AnimationMode,
}

fn default_style_id() -> String {
    "classic".to_string()
}

impl Default for Placement {
    fn default() -> Self {
        Self::for_video(1440.0, 1080.0)
    }
}

impl Placement {
    /// Default placement for a video: 80% wide, 10% tall, centered
    /// horizontally in the lower area of the frame.
    pub fn for_video(video_width: f64, video_height: f64) -> Self {
        Self {
            width: video_width * 0.8,
            height: video_height * 0.1,
            left: video_width * 0.1,
            top: video_height * 0.8,
            font_family: "Anton".to_string(),
            font_size: 42.0,
            color: "#ffffff".to_string(),
            italic: false,
            style_id: default_style_id(),
            animation: AnimationMode::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_placement_fractions() {
        let placement = Placement::for_video(1000.0, 500.0);
        assert_eq!(placement.width, 800.0);
        assert_eq!(placement.height, 50.0);
        assert_eq!(placement.left, 100.0);
        assert_eq!(placement.top, 400.0);
    }

    #[test]
    fn test_placement_serialization_defaults() {
        // Older session files carry neither style_id nor animation.
        let json = r##"{
            "width": 800.0, "height": 100.0, "left": 100.0, "top": 400.0,
            "font_family": "Anton", "font_size": 42.0,
            "color": "#ffffff", "italic": false
        }"##;
        let placement: Placement = serde_json::from_str(json).unwrap();
        assert_eq!(placement.style_id, "classic");
        assert_eq!(placement.animation, AnimationMode::None);
    }
}
