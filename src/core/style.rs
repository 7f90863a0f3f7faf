//! Caption style templates.
//!
//! Pure lookup from a style id plus a word's lit state to the visual
//! attributes the preview renders. Holds no state; the scheduler decides
//! which words are lit, this module decides what lit and unlit look like.

use crate::state::Placement;

pub const STYLE_IDS: [&str; 4] = ["classic", "boldpop", "gradient", "outline"];

/// Visual attributes for one word.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVisual {
    pub opacity: f64,
    pub scale: f64,
    pub color: String,
    pub text_stroke: Option<&'static str>,
    pub text_shadow: Option<&'static str>,
    /// Gradient text fill; overrides `color` when set.
    pub gradient: Option<&'static str>,
}

impl WordVisual {
    /// Inline CSS for this word, composed with the placement's font
    /// settings by the caller.
    pub fn css(&self) -> String {
        let mut css = format!(
            "opacity: {}; transform: scale({}); transition: all 0.3s ease-in-out;",
            self.opacity, self.scale
        );
        if let Some(gradient) = self.gradient {
            css.push_str(&format!(
                " background: {gradient}; -webkit-background-clip: text; background-clip: text; color: transparent;"
            ));
        } else {
            css.push_str(&format!(" color: {};", self.color));
        }
        if let Some(stroke) = self.text_stroke {
            css.push_str(&format!(" -webkit-text-stroke: {stroke};"));
        }
        if let Some(shadow) = self.text_shadow {
            css.push_str(&format!(" text-shadow: {shadow};"));
        }
        css
    }
}

const GRADIENT_FILL: &str = "linear-gradient(to right, #f472b6, #9333ea)";

/// Attributes for one word under `style_id`. Unknown ids render as
/// "classic".
pub fn word_visual(style_id: &str, lit: bool, placement: &Placement) -> WordVisual {
    let color = placement.color.clone();
    match style_id {
        "boldpop" => {
            if lit {
                WordVisual {
                    opacity: 1.0,
                    scale: 1.0,
                    color,
                    text_stroke: None,
                    text_shadow: None,
                    gradient: None,
                }
            } else {
                WordVisual {
                    opacity: 0.0,
                    scale: 0.5,
                    color,
                    text_stroke: None,
                    text_shadow: None,
                    gradient: None,
                }
            }
        }
        "gradient" => WordVisual {
            opacity: if lit { 1.0 } else { 0.5 },
            scale: if lit { 1.0 } else { 0.95 },
            color,
            text_stroke: None,
            text_shadow: Some("0 2px 4px rgba(0, 0, 0, 0.3)"),
            gradient: Some(GRADIENT_FILL),
        },
        "outline" => WordVisual {
            opacity: 1.0,
            scale: if lit { 1.1 } else { 1.0 },
            color: if lit { color } else { "#ffffff".to_string() },
            text_stroke: Some("1px black"),
            text_shadow: None,
            gradient: None,
        },
        _ => WordVisual {
            opacity: if lit { 1.0 } else { 0.3 },
            scale: if lit { 1.0 } else { 0.95 },
            color,
            text_stroke: None,
            text_shadow: None,
            gradient: None,
        },
    }
}

/// Inline CSS for the caption container under `style_id`.
pub fn container_css(style_id: &str) -> &'static str {
    match style_id {
        "boldpop" => {
            "background: rgba(17, 24, 39, 0.8); backdrop-filter: blur(4px); border-radius: 12px; padding: 16px 24px; gap: 12px;"
        }
        "gradient" => {
            "background: #ffffff; border-radius: 12px; padding: 16px 24px; gap: 8px;"
        }
        "outline" => {
            "background: rgba(31, 41, 55, 0.7); backdrop-filter: blur(4px); border-radius: 12px; padding: 16px 24px; gap: 12px;"
        }
        _ => {
            "background: #ffffff; backdrop-filter: blur(4px); border-radius: 16px; padding: 16px 24px; gap: 6px; border: 2px solid #bfdbfe; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);"
        }
    }
}
