use dioxus::prelude::*;

use crate::constants::{ACCENT_PLAYHEAD, RESIZE_HANDLE_SIZE};
use crate::core::overlay::ResizeHandle;
use crate::state::{Placement, VideoMeta};

/// CSS position of one resize handle on the box edge.
fn handle_position(handle: ResizeHandle) -> &'static str {
    match handle {
        ResizeHandle::TopLeft => "top: -7px; left: -7px;",
        ResizeHandle::Top => "top: -7px; left: 50%; margin-left: -7px;",
        ResizeHandle::TopRight => "top: -7px; right: -7px;",
        ResizeHandle::Right => "top: 50%; right: -7px; margin-top: -7px;",
        ResizeHandle::BottomRight => "bottom: -7px; right: -7px;",
        ResizeHandle::Bottom => "bottom: -7px; left: 50%; margin-left: -7px;",
        ResizeHandle::BottomLeft => "bottom: -7px; left: -7px;",
        ResizeHandle::Left => "top: 50%; left: -7px; margin-top: -7px;",
    }
}

/// The movable caption box over the preview surface. Geometry renders in
/// percent of the video's design size, so the same placement is correct
/// at any preview scale. Pointer-downs are forwarded up; the app owns
/// the drag session and writes the placement back.
#[component]
pub(crate) fn OverlayBox(
    placement: Placement,
    video: VideoMeta,
    selected: bool,
    on_body_down: EventHandler<(f64, f64)>,
    on_handle_down: EventHandler<(ResizeHandle, (f64, f64))>,
    children: Element,
) -> Element {
    let mut hovered = use_signal(|| false);

    let video_w = (video.width as f64).max(1.0);
    let video_h = (video.height as f64).max(1.0);
    let left_pct = placement.left / video_w * 100.0;
    let top_pct = placement.top / video_h * 100.0;
    let width_pct = placement.width / video_w * 100.0;
    let height_pct = placement.height / video_h * 100.0;

    let border = if selected {
        format!("1px solid {ACCENT_PLAYHEAD}")
    } else if hovered() {
        "1px dashed rgba(255, 255, 255, 0.4)".to_string()
    } else {
        "1px solid transparent".to_string()
    };

    rsx! {
        div {
            style: "
                position: absolute;
                left: {left_pct}%;
                top: {top_pct}%;
                width: {width_pct}%;
                height: {height_pct}%;
                border: {border};
                display: flex; align-items: center; justify-content: center;
                cursor: move;
                user-select: none;
            ",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            onmousedown: move |e| {
                if let Some(btn) = e.trigger_button() {
                    if format!("{:?}", btn) == "Primary" {
                        e.prevent_default();
                        e.stop_propagation();
                        let coords = e.client_coordinates();
                        on_body_down.call((coords.x, coords.y));
                    }
                }
            },

            {children}

            if selected {
                for handle in ResizeHandle::ALL {
                    {
                        let position = handle_position(handle);
                        let cursor = handle.cursor();
                        rsx! {
                            div {
                                key: "handle-{handle:?}",
                                style: "
                                    position: absolute;
                                    {position}
                                    width: {RESIZE_HANDLE_SIZE}px; height: {RESIZE_HANDLE_SIZE}px;
                                    background-color: {ACCENT_PLAYHEAD};
                                    border: 2px solid #ffffff;
                                    border-radius: 50%;
                                    cursor: {cursor};
                                    z-index: 10;
                                ",
                                onmousedown: move |e| {
                                    if let Some(btn) = e.trigger_button() {
                                        if format!("{:?}", btn) == "Primary" {
                                            e.prevent_default();
                                            e.stop_propagation();
                                            let coords = e.client_coordinates();
                                            on_handle_down.call((handle, (coords.x, coords.y)));
                                        }
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
