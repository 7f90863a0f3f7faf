use dioxus::prelude::*;

use crate::constants::{BG_HOVER, TEXT_MUTED};

/// Round transport button; the primary (play/pause) one renders larger.
#[component]
pub(crate) fn PlaybackBtn(
    icon: &'static str,
    #[props(default = false)] primary: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let (size, bg) = if primary {
        (30.0, BG_HOVER)
    } else {
        (24.0, "transparent")
    };
    rsx! {
        button {
            style: "
                width: {size}px; height: {size}px;
                border: none; border-radius: 50%;
                background-color: {bg}; color: {TEXT_MUTED};
                font-size: 11px; cursor: pointer;
                display: flex; align-items: center; justify-content: center;
                transition: background-color 0.15s ease;
            ",
            onclick: move |e| on_click.call(e),
            "{icon}"
        }
    }
}
