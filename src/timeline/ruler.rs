use dioxus::prelude::*;

use crate::constants::TEXT_DIM;
use crate::utils::format_marker;

/// Marker row above the subtitle bars: evenly spaced time labels for the
/// visible window, separated by dots. Pointer events pass through so the
/// track underneath handles seeking.
#[component]
pub(crate) fn MarkerRow(markers: Vec<f64>) -> Element {
    let last = markers.len().saturating_sub(1);
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 18px; padding: 0 4px;
                pointer-events: none; user-select: none;
            ",
            for (i, time) in markers.iter().enumerate() {
                span {
                    key: "marker-{i}",
                    style: "font-family: 'SF Mono', Consolas, monospace; font-size: 9px; color: {TEXT_DIM};",
                    {format_marker(*time)}
                }
                if i < last {
                    span {
                        key: "dot-{i}",
                        style: "font-size: 9px; color: {TEXT_DIM}; opacity: 0.5;",
                        "·"
                    }
                }
            }
        }
    }
}
