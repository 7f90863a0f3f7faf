use dioxus::prelude::*;

use crate::constants::{
    ACCENT_PLAYHEAD, BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, SKIP_SECONDS, TEXT_DIM, TEXT_MUTED,
    TEXT_SECONDARY,
};
use crate::core::timeline::{BoundaryHandle, TimelineView};
use crate::state::Subtitle;
use crate::utils::format_time;

use super::playback_controls::PlaybackBtn;
use super::ruler::MarkerRow;
use super::subtitle_bar::SubtitleBar;

/// Main timeline panel: header with playback and zoom controls, marker
/// row, subtitle track, and playhead. The `view` argument carries the
/// zoom level and window math; bar geometry is percent-of-window so the
/// panel needs no pixel measurements of its own.
#[component]
pub fn TimelinePanel(
    view: TimelineView,
    subtitles: Vec<Subtitle>,
    current_time: f64,
    duration: f64,
    is_playing: bool,
    selected_subtitle: Option<u32>,
    on_seek_down: EventHandler<f64>,
    on_seek: EventHandler<f64>,
    on_skip: EventHandler<f64>,
    on_play_pause: EventHandler<MouseEvent>,
    on_zoom_change: EventHandler<f64>,
    on_select: EventHandler<u32>,
    on_boundary_down: EventHandler<(u32, BoundaryHandle)>,
    track_width: f64,
) -> Element {
    let markers = view.time_markers(current_time);
    let playhead_pct = view.time_to_position(current_time, current_time);
    let zoom = view.zoom_level();
    let play_icon = if is_playing { "⏸" } else { "▶" };
    let timecode = format_time(current_time);
    let total_label = format_time(duration);

    // Visible bars only: fully off-window bars clamp to zero width.
    let bars: Vec<(u32, String, f64, f64, bool)> = subtitles
        .iter()
        .filter_map(|sub| {
            let left = view.time_to_position(sub.start, current_time);
            let right = view.time_to_position(sub.end, current_time);
            let width = right - left;
            if width <= 0.0 {
                return None;
            }
            let selected = selected_subtitle == Some(sub.id);
            Some((sub.id, sub.text.clone(), left, width, selected))
        })
        .collect();

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                height: 100%;
                background-color: {BG_ELEVATED};
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

                // Left: label + zoom controls
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    span {
                        style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                        "Timeline"
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 4px;",
                        button {
                            style: "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
                            onclick: move |_| on_zoom_change.call(zoom - 10.0),
                            "−"
                        }
                        span {
                            style: "font-size: 10px; color: {TEXT_DIM}; min-width: 36px; text-align: center;",
                            "{zoom:.0}%"
                        }
                        button {
                            style: "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
                            onclick: move |_| on_zoom_change.call(zoom + 10.0),
                            "+"
                        }
                    }
                }

                // Center: playback controls
                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    PlaybackBtn {
                        icon: "⏮",
                        on_click: move |_| on_seek.call(0.0),
                    }
                    PlaybackBtn {
                        icon: "⏪",
                        on_click: move |_| on_skip.call(-SKIP_SECONDS),
                    }
                    PlaybackBtn {
                        icon: play_icon,
                        primary: true,
                        on_click: move |e| on_play_pause.call(e),
                    }
                    PlaybackBtn {
                        icon: "⏩",
                        on_click: move |_| on_skip.call(SKIP_SECONDS),
                    }
                    PlaybackBtn {
                        icon: "⏭",
                        on_click: move |_| on_seek.call(duration),
                    }
                }

                // Right: timecode
                span {
                    style: "font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_SECONDARY};",
                    "{timecode} / {total_label}"
                }
            }

            // Track area: marker row + subtitle lane + playhead
            div {
                id: "timeline-track",
                style: "
                    flex: 1; position: relative;
                    display: flex; flex-direction: column;
                    padding: 4px 0 0 0;
                    cursor: pointer;
                ",
                onmousedown: move |e| {
                    if track_width > 0.0 {
                        let fraction = (e.element_coordinates().x / track_width).clamp(0.0, 1.0);
                        on_seek_down.call(fraction);
                    }
                },

                MarkerRow { markers }

                // Subtitle lane
                div {
                    style: "position: relative; flex: 1; min-height: 40px;",
                    for (id, text, left, width, selected) in bars {
                        SubtitleBar {
                            key: "bar-{id}",
                            id,
                            text,
                            left_pct: left,
                            width_pct: width,
                            selected,
                            on_select: move |id| on_select.call(id),
                            on_boundary_down: move |down| on_boundary_down.call(down),
                        }
                    }
                }

                // Playhead
                div {
                    style: "
                        position: absolute; left: {playhead_pct}%; top: 0; bottom: 0;
                        width: 2px; margin-left: -1px;
                        background-color: {ACCENT_PLAYHEAD};
                        pointer-events: none; z-index: 20;
                    ",
                    div {
                        style: "
                            position: absolute; top: 0; left: -4px;
                            width: 0; height: 0;
                            border-left: 5px solid transparent;
                            border-right: 5px solid transparent;
                            border-top: 6px solid {ACCENT_PLAYHEAD};
                        ",
                    }
                }
            }
        }
    }
}
