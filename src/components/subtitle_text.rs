use dioxus::prelude::*;

use crate::core::style::{container_css, word_visual};
use crate::state::Placement;

/// The caption text inside the overlay box: one span per word, styled by
/// the active template and the scheduler's lit set. `scale` is the
/// rendered-to-design factor so font sizes track the preview size.
#[component]
pub(crate) fn SubtitleText(
    words: Vec<String>,
    lit: Vec<bool>,
    placement: Placement,
    scale: f64,
) -> Element {
    let container = container_css(&placement.style_id);
    let font_size = placement.font_size * scale;
    let font_style = if placement.italic { "italic" } else { "normal" };

    rsx! {
        div {
            style: "
                display: inline-flex; flex-wrap: wrap; align-items: center;
                justify-content: center; max-width: 100%;
                font-family: {placement.font_family};
                font-size: {font_size}px;
                font-style: {font_style};
                {container}
            ",
            for (i, word) in words.iter().enumerate() {
                {
                    let visual = word_visual(
                        &placement.style_id,
                        lit.get(i).copied().unwrap_or(false),
                        &placement,
                    );
                    let css = visual.css();
                    rsx! {
                        span {
                            key: "word-{i}",
                            style: "display: inline-block; {css}",
                            "{word}"
                        }
                    }
                }
            }
        }
    }
}
