use dioxus::prelude::*;

use crate::constants::{ACCENT_PLAYHEAD, BG_DEEPEST, BG_SURFACE, BORDER_DEFAULT, TEXT_MUTED};
use crate::core::overlay::ResizeHandle;
use crate::core::style::STYLE_IDS;
use crate::state::{AnimationMode, Placement, VideoMeta};
use crate::utils::parse_f64_input;

use super::overlay_box::OverlayBox;
use super::subtitle_text::SubtitleText;

const ANIMATION_MODES: [(AnimationMode, &str); 3] = [
    (AnimationMode::None, "None"),
    (AnimationMode::Highlight, "Highlight"),
    (AnimationMode::Karaoke, "Karaoke"),
];

const FONT_FAMILIES: [&str; 8] = [
    "Anton",
    "Arial",
    "Bangers",
    "Georgia",
    "Inter",
    "Montserrat",
    "Poppins",
    "Roboto",
];

/// Video preview: a letterboxed surface at the video's aspect ratio with
/// the caption overlay on top. The surface carries a stable element id
/// so the app can watch its rendered size and keep the visual scale
/// current.
#[component]
pub fn PreviewPanel(
    video: VideoMeta,
    placement: Placement,
    overlay_selected: bool,
    words: Vec<String>,
    lit: Vec<bool>,
    scale: f64,
    on_overlay_down: EventHandler<(f64, f64)>,
    on_handle_down: EventHandler<(ResizeHandle, (f64, f64))>,
    on_background_down: EventHandler<MouseEvent>,
    on_style_change: EventHandler<String>,
    on_animation_change: EventHandler<AnimationMode>,
    on_font_change: EventHandler<String>,
    on_font_size_change: EventHandler<f64>,
    on_italic_toggle: EventHandler<MouseEvent>,
    on_color_change: EventHandler<String>,
) -> Element {
    let aspect = format!("{} / {}", video.width.max(1), video.height.max(1));
    let has_caption = !words.is_empty();
    let style_id = placement.style_id.clone();
    let animation = placement.animation;
    let font_family = placement.font_family.clone();
    let font_size = placement.font_size;
    let italic_color = if placement.italic {
        ACCENT_PLAYHEAD
    } else {
        TEXT_MUTED
    };

    rsx! {
        div {
            style: "
                flex: 1; display: flex; flex-direction: column;
                min-width: 0; overflow: hidden;
            ",

            // Header strip: style template and animation mode pickers
            div {
                style: "
                    display: flex; align-items: center; gap: 12px;
                    height: 32px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",
                span {
                    style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                    "Preview"
                }
                select {
                    style: "background: transparent; color: {TEXT_MUTED}; border: 1px solid {BORDER_DEFAULT}; border-radius: 3px; font-size: 10px; padding: 2px 4px;",
                    onchange: move |e| on_style_change.call(e.value()),
                    for id in STYLE_IDS {
                        option {
                            value: "{id}",
                            selected: style_id == id,
                            "{id}"
                        }
                    }
                }
                select {
                    style: "background: transparent; color: {TEXT_MUTED}; border: 1px solid {BORDER_DEFAULT}; border-radius: 3px; font-size: 10px; padding: 2px 4px;",
                    onchange: move |e| {
                        let picked = ANIMATION_MODES
                            .iter()
                            .find(|(_, label)| *label == e.value())
                            .map(|(mode, _)| *mode)
                            .unwrap_or_default();
                        on_animation_change.call(picked);
                    },
                    for (mode, label) in ANIMATION_MODES {
                        option {
                            value: "{label}",
                            selected: animation == mode,
                            "{label}"
                        }
                    }
                }

                // Text settings: font, size, italic, color
                select {
                    style: "background: transparent; color: {TEXT_MUTED}; border: 1px solid {BORDER_DEFAULT}; border-radius: 3px; font-size: 10px; padding: 2px 4px; max-width: 110px;",
                    onchange: move |e| on_font_change.call(e.value()),
                    for family in FONT_FAMILIES {
                        option {
                            value: "{family}",
                            selected: font_family == family,
                            "{family}"
                        }
                    }
                }
                input {
                    r#type: "number",
                    min: "8",
                    max: "200",
                    style: "width: 44px; background: transparent; color: {TEXT_MUTED}; border: 1px solid {BORDER_DEFAULT}; border-radius: 3px; font-size: 10px; padding: 2px 4px;",
                    value: "{font_size}",
                    onchange: move |e| {
                        on_font_size_change.call(parse_f64_input(&e.value(), font_size));
                    },
                }
                button {
                    title: "Italic",
                    style: "width: 20px; height: 20px; border: 1px solid {BORDER_DEFAULT}; border-radius: 3px; background: transparent; color: {italic_color}; font-size: 11px; font-style: italic; cursor: pointer;",
                    onclick: move |e| on_italic_toggle.call(e),
                    "I"
                }
                input {
                    r#type: "color",
                    title: "Text color",
                    style: "width: 22px; height: 20px; border: 1px solid {BORDER_DEFAULT}; border-radius: 3px; background: transparent; padding: 1px; cursor: pointer;",
                    value: "{placement.color}",
                    oninput: move |e| on_color_change.call(e.value()),
                }
            }

            // Letterbox area
            div {
                style: "
                    flex: 1; display: flex; align-items: center; justify-content: center;
                    background-color: {BG_DEEPEST}; overflow: hidden; padding: 16px;
                ",
                onmousedown: move |e| on_background_down.call(e),

                // The video surface stand-in, at the video's aspect ratio
                div {
                    id: "preview-surface",
                    style: "
                        position: relative;
                        max-width: 100%; max-height: 100%;
                        aspect-ratio: {aspect};
                        width: 100%;
                        background-color: #000000;
                        overflow: hidden;
                    ",

                    OverlayBox {
                        placement: placement.clone(),
                        video: video.clone(),
                        selected: overlay_selected,
                        on_body_down: move |point| on_overlay_down.call(point),
                        on_handle_down: move |down| on_handle_down.call(down),
                        if has_caption {
                            SubtitleText {
                                words: words.clone(),
                                lit: lit.clone(),
                                placement: placement.clone(),
                                scale,
                            }
                        }
                    }
                }
            }
        }
    }
}
