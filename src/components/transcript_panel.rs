use dioxus::prelude::*;

use crate::constants::{
    ACCENT_PLAYHEAD, ACCENT_WARNING, BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, BORDER_SUBTLE,
    LOW_CONFIDENCE_LOGPROB, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::state::Subtitle;
use crate::utils::format_timestamp;

/// Transcript side panel: every subtitle with its time strip and
/// editable text. Clicking a time seeks the playhead there. Rows whose
/// transcription confidence is low get a warning tint. Text inputs
/// report focus so the app can suppress hotkeys while typing.
#[component]
pub fn TranscriptPanel(
    subtitles: Vec<Subtitle>,
    active_id: Option<u32>,
    on_seek: EventHandler<f64>,
    on_text_change: EventHandler<(u32, String)>,
    on_remove: EventHandler<u32>,
    on_split: EventHandler<u32>,
    on_add: EventHandler<MouseEvent>,
    on_open_transcript: EventHandler<MouseEvent>,
    on_input_focus: EventHandler<bool>,
) -> Element {
    rsx! {
        div {
            style: "
                display: flex; flex-direction: column; height: 100%;
                background-color: {BG_ELEVATED};
                border-left: 1px solid {BORDER_DEFAULT};
                overflow: hidden;
            ",

            // Header
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 32px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",
                span {
                    style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                    "Transcript"
                }
                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    button {
                        style: "padding: 0 6px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 10px; cursor: pointer;",
                        onclick: move |e| on_open_transcript.call(e),
                        "Open…"
                    }
                    button {
                        style: "padding: 0 6px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 10px; cursor: pointer;",
                        onclick: move |e| on_add.call(e),
                        "+ Add"
                    }
                }
            }

            // Rows
            div {
                style: "flex: 1; overflow-y: auto; padding: 8px;",
                if subtitles.is_empty() {
                    div {
                        style: "padding: 24px 12px; font-size: 11px; color: {TEXT_DIM}; text-align: center;",
                        "No subtitles yet. Open a transcript or add one at the playhead."
                    }
                }
                for sub in subtitles {
                    {
                        let id = sub.id;
                        let start = sub.start;
                        let low_confidence = sub
                            .avg_logprob
                            .map(|p| p < LOW_CONFIDENCE_LOGPROB)
                            .unwrap_or(false);
                        let is_active = active_id == Some(id);
                        let row_border = if is_active {
                            ACCENT_PLAYHEAD
                        } else if low_confidence {
                            ACCENT_WARNING
                        } else {
                            BORDER_SUBTLE
                        };
                        let start_label = format_timestamp(sub.start);
                        let end_label = format_timestamp(sub.end);
                        rsx! {
                            div {
                                key: "row-{id}",
                                style: "
                                    margin-bottom: 8px; padding: 6px 8px;
                                    border: 1px solid {row_border}; border-radius: 4px;
                                ",

                                // Time strip
                                div {
                                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 4px;",
                                    button {
                                        style: "border: none; background: transparent; padding: 0; font-family: 'SF Mono', Consolas, monospace; font-size: 9px; color: {TEXT_DIM}; cursor: pointer;",
                                        onclick: move |_| on_seek.call(start),
                                        "{start_label} – {end_label}"
                                    }
                                    div {
                                        style: "display: flex; gap: 2px;",
                                        button {
                                            title: "Split at playhead",
                                            style: "width: 16px; height: 16px; border: none; background: transparent; color: {TEXT_DIM}; font-size: 9px; cursor: pointer;",
                                            onclick: move |_| on_split.call(id),
                                            "⑂"
                                        }
                                        button {
                                            title: "Delete",
                                            style: "width: 16px; height: 16px; border: none; background: transparent; color: {TEXT_DIM}; font-size: 9px; cursor: pointer;",
                                            onclick: move |_| on_remove.call(id),
                                            "✕"
                                        }
                                    }
                                }

                                input {
                                    style: "
                                        width: 100%; box-sizing: border-box;
                                        background: transparent; border: none; outline: none;
                                        font-size: 11px; color: {TEXT_PRIMARY};
                                    ",
                                    value: "{sub.text}",
                                    onfocusin: move |_| on_input_focus.call(true),
                                    onfocusout: move |_| on_input_focus.call(false),
                                    oninput: move |e| on_text_change.call((id, e.value())),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
