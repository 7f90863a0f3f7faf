use dioxus::prelude::*;

use crate::constants::{
    ACCENT_SUBTITLE, ACCENT_SUBTITLE_SELECTED, BG_ELEVATED, SUBTITLE_BAR_HEIGHT, TEXT_PRIMARY,
};
use crate::core::timeline::BoundaryHandle;

/// One subtitle on the timeline track, positioned in percent of the
/// visible window, with a boundary drag handle on each edge.
#[component]
pub(crate) fn SubtitleBar(
    id: u32,
    text: String,
    left_pct: f64,
    width_pct: f64,
    selected: bool,
    on_select: EventHandler<u32>,
    on_boundary_down: EventHandler<(u32, BoundaryHandle)>,
) -> Element {
    let border_color = if selected {
        ACCENT_SUBTITLE_SELECTED
    } else {
        ACCENT_SUBTITLE
    };
    let selection_ring = if selected {
        format!("0 0 0 1px {ACCENT_SUBTITLE_SELECTED}")
    } else {
        "none".to_string()
    };

    rsx! {
        div {
            style: "
                position: absolute;
                left: {left_pct}%;
                top: 4px;
                width: {width_pct}%;
                height: {SUBTITLE_BAR_HEIGHT}px;
                background-color: {BG_ELEVATED};
                border: 1px solid {border_color};
                box-shadow: {selection_ring};
                border-radius: 4px;
                display: flex;
                align-items: center;
                overflow: visible;
                user-select: none;
            ",
            onmousedown: move |e| {
                e.stop_propagation();
                on_select.call(id);
            },

            // Left boundary handle
            div {
                style: "
                    position: absolute; left: -4px; top: 0; bottom: 0; width: 10px;
                    cursor: ew-resize; z-index: 10;
                    border-radius: 4px 0 0 4px;
                ",
                onmousedown: move |e| {
                    if let Some(btn) = e.trigger_button() {
                        if format!("{:?}", btn) == "Primary" {
                            e.prevent_default();
                            e.stop_propagation();
                            on_select.call(id);
                            on_boundary_down.call((id, BoundaryHandle::Start));
                        }
                    }
                },
                div {
                    style: "
                        position: absolute; left: 3px; top: 6px; bottom: 6px; width: 4px;
                        background-color: rgba(255, 255, 255, 0.2);
                        border-radius: 2px;
                        pointer-events: none;
                    ",
                }
            }

            // Bar body
            div {
                style: "
                    flex: 1; height: 100%; display: flex; align-items: center;
                    padding: 0 10px; overflow: hidden; position: relative; z-index: 1;
                ",
                div {
                    style: "width: 3px; height: 20px; border-radius: 2px; background-color: {border_color}; flex-shrink: 0; margin-right: 6px;",
                }
                span {
                    style: "
                        font-size: 10px; color: {TEXT_PRIMARY};
                        white-space: nowrap; overflow: hidden; text-overflow: ellipsis;
                        flex: 1; min-width: 0;
                    ",
                    "{text}"
                }
            }

            // Right boundary handle
            div {
                style: "
                    position: absolute; right: -4px; top: 0; bottom: 0; width: 10px;
                    cursor: ew-resize; z-index: 10;
                    border-radius: 0 4px 4px 0;
                ",
                onmousedown: move |e| {
                    if let Some(btn) = e.trigger_button() {
                        if format!("{:?}", btn) == "Primary" {
                            e.prevent_default();
                            e.stop_propagation();
                            on_select.call(id);
                            on_boundary_down.call((id, BoundaryHandle::End));
                        }
                    }
                },
                div {
                    style: "
                        position: absolute; right: 3px; top: 6px; bottom: 6px; width: 4px;
                        background-color: rgba(255, 255, 255, 0.2);
                        border-radius: 2px;
                        pointer-events: none;
                    ",
                }
            }
        }
    }
}
