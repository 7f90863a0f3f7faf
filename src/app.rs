//! Root application component
//!
//! Owns the session, the playback clock, the timeline view, and the
//! single active drag session. Pointer-down events bubble up from the
//! panels; the global `onmousemove`/`onmouseup` handlers here feed the
//! gesture engines and commit results back into the session.

use dioxus::prelude::*;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::components::{PreviewPanel, TranscriptPanel};
use crate::constants::{
    BG_BASE, BORDER_DEFAULT, BORDER_STRONG, CLOCK_TICK_INTERVAL_MS, NEW_SUBTITLE_SECONDS,
    OVERLAY_MIN_HEIGHT, OVERLAY_MIN_WIDTH, PANEL_DEFAULT_WIDTH, TEXT_PRIMARY, TIMELINE_HEIGHT,
};
use crate::core::clock::FrameClock;
use crate::core::overlay::{MoveDrag, Rect, ResizeDrag};
use crate::core::scale::VisualScale;
use crate::core::schedule::{word_states, LiveSchedule};
use crate::core::timeline::{BoundaryDrag, TimelineView};
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{load_transcript, AnimationMode, Session};
use crate::timeline::TimelinePanel;

const SESSION_FOLDER: &str = "sessions/default";

/// Watches the timeline track element and streams its viewport-space
/// left edge and width to the app.
const TRACK_METRICS_SCRIPT: &str = r#"
const hostId = "timeline-track";
let last = null;

function sendRect() {
    const host = document.getElementById(hostId);
    if (!host) {
        return;
    }
    const rect = host.getBoundingClientRect();
    const next = { left: rect.left, width: rect.width };
    if (last !== null && Math.abs(last.left - next.left) < 0.5 && Math.abs(last.width - next.width) < 0.5) {
        return;
    }
    last = next;
    dioxus.send(next);
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendRect());
    observer.observe(host);
    window.addEventListener("resize", sendRect, { passive: true });
    sendRect();
}

attach();
await new Promise(() => {});
"#;

/// Watches the preview surface and streams its viewport rect so pointer
/// coordinates can be mapped into design space.
const SURFACE_RECT_SCRIPT: &str = r#"
const hostId = "preview-surface";
let last = null;

function sendRect() {
    const host = document.getElementById(hostId);
    if (!host) {
        return;
    }
    const rect = host.getBoundingClientRect();
    const next = { left: rect.left, top: rect.top, width: rect.width, height: rect.height };
    if (last !== null
        && Math.abs(last.left - next.left) < 0.5
        && Math.abs(last.top - next.top) < 0.5
        && Math.abs(last.width - next.width) < 0.5
        && Math.abs(last.height - next.height) < 0.5) {
        return;
    }
    last = next;
    dioxus.send(next);
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendRect());
    observer.observe(host);
    window.addEventListener("resize", sendRect, { passive: true });
    sendRect();
}

attach();
await new Promise(() => {});
"#;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
struct TrackMetrics {
    left: f64,
    width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
struct SurfaceRect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

/// The one gesture that may be in flight. Pointer-move events route to
/// the active session's engine; pointer-up commits and clears it.
enum DragSession {
    Seek,
    Boundary(BoundaryDrag),
    OverlayMove(MoveDrag),
    OverlayResize(ResizeDrag),
}

#[component]
pub fn App() -> Element {
    // Session state - the core data model
    let mut session = use_signal(|| {
        let folder = PathBuf::from(SESSION_FOLDER);
        match Session::load(&folder) {
            Ok(loaded) => loaded,
            Err(_) => Session::create_in(&folder, "default").unwrap_or_else(|err| {
                eprintln!("[SESSION WARN] Could not create session folder: {}", err);
                let mut fresh = Session::default();
                fresh.session_path = Some(folder);
                fresh
            }),
        }
    });

    let duration = session.read().duration();
    let fps = session.read().fps();

    let mut clock = use_signal(|| FrameClock::new(fps, duration));
    let mut view = use_signal(|| TimelineView::new(duration));

    // Selection
    let mut selected_subtitle = use_signal(|| None::<u32>);
    let mut overlay_selected = use_signal(|| false);
    let mut input_focused = use_signal(|| false);

    // Drag state
    let mut drag = use_signal(|| None::<DragSession>);

    // Element geometry streamed from the webview
    let mut track_metrics = use_signal(|| None::<TrackMetrics>);
    let surface_rect = use_signal(|| None::<SurfaceRect>);
    let mut scale = use_signal(VisualScale::default);
    let mut track_eval = use_signal(|| None::<document::Eval>);
    let mut surface_eval = use_signal(|| None::<document::Eval>);

    // Live word animation: the current pass and its lit set. Bumping the
    // generation invalidates outstanding timers.
    let mut animation_generation = use_signal(|| 0_u64);
    let mut live_subtitle = use_signal(|| None::<u32>);
    let mut live_lit = use_signal(Vec::<bool>::new);

    let invalidate_animation = move || {
        let mut animation_generation = animation_generation;
        let mut live_subtitle = live_subtitle;
        animation_generation.with_mut(|g| *g += 1);
        live_subtitle.set(None);
    };

    let save_session = move || {
        let mut session = session;
        if let Err(err) = session.write().save() {
            eprintln!("[SESSION WARN] Save failed: {}", err);
        };
    };

    use_effect(move || {
        if track_eval().is_some() {
            return;
        }
        track_eval.set(Some(document::eval(TRACK_METRICS_SCRIPT)));
    });

    use_effect(move || {
        if surface_eval().is_some() {
            return;
        }
        surface_eval.set(Some(document::eval(SURFACE_RECT_SCRIPT)));
    });

    use_future(move || {
        let mut track_metrics = track_metrics;
        let track_eval = track_eval;
        async move {
            loop {
                let Some(eval) = track_eval() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                let mut eval = eval;
                loop {
                    match eval.recv::<TrackMetrics>().await {
                        Ok(metrics) => {
                            if track_metrics() != Some(metrics) {
                                track_metrics.set(Some(metrics));
                            }
                        }
                        Err(_) => break,
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    use_future(move || {
        let mut surface_rect = surface_rect;
        let surface_eval = surface_eval;
        let mut scale = scale;
        let session = session;
        async move {
            loop {
                let Some(eval) = surface_eval() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                let mut eval = eval;
                loop {
                    match eval.recv::<SurfaceRect>().await {
                        Ok(rect) => {
                            if surface_rect() != Some(rect) {
                                surface_rect.set(Some(rect));
                                let video = session.peek().video.clone();
                                scale.write().measure(
                                    rect.width,
                                    rect.height,
                                    video.width as f64,
                                    video.height as f64,
                                );
                            }
                        }
                        Err(_) => break,
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    // Playback clock tick
    use_future(move || {
        let mut clock = clock;
        async move {
            let mut last_tick = Instant::now();
            loop {
                tokio::time::sleep(Duration::from_millis(CLOCK_TICK_INTERVAL_MS)).await;
                if !clock.peek().is_playing() {
                    last_tick = Instant::now();
                    continue;
                }
                let now = Instant::now();
                let delta = now.saturating_duration_since(last_tick);
                last_tick = now;
                clock.write().advance(delta.as_secs_f64());
            }
        }
    });

    // Live animation driver: arm a schedule when playback enters a
    // subtitle, replay its events on the word grid, drop it when stale.
    use_future(move || {
        let clock = clock;
        let session = session;
        let mut animation_generation = animation_generation;
        let mut live_subtitle = live_subtitle;
        let mut live_lit = live_lit;
        async move {
            loop {
                tokio::time::sleep(Duration::from_millis(CLOCK_TICK_INTERVAL_MS)).await;
                if !clock.peek().is_playing() {
                    if live_subtitle.peek().is_some() {
                        live_subtitle.set(None);
                        live_lit.set(Vec::new());
                    }
                    continue;
                }
                let time = clock.peek().current_time();
                let mode = session.peek().placement.animation;
                let active = session
                    .peek()
                    .subtitles
                    .subtitle_at(time)
                    .map(|sub| (sub.id, sub.start, sub.end, sub.words().len()));

                match active {
                    Some((id, start, end, word_count))
                        if mode != AnimationMode::None && *live_subtitle.peek() != Some(id) =>
                    {
                        let generation = *animation_generation.peek() + 1;
                        animation_generation.set(generation);
                        live_subtitle.set(Some(id));

                        let schedule =
                            LiveSchedule::build(word_count, end - start, mode, generation);
                        let clock = clock;
                        let animation_generation = animation_generation;
                        let mut live_lit = live_lit;
                        spawn(async move {
                            loop {
                                if schedule.is_stale(*animation_generation.peek()) {
                                    return;
                                }
                                let now = clock.peek().current_time();
                                let elapsed = (now - start).max(0.0);
                                if elapsed >= end - start {
                                    live_lit.set(schedule.states_at(end - start));
                                    return;
                                }
                                let lit = schedule.states_at(elapsed);
                                if lit != *live_lit.peek() {
                                    live_lit.set(lit);
                                }
                                let next = schedule
                                    .next_event_at(elapsed)
                                    .unwrap_or(end - start);
                                let wait = (next - elapsed).clamp(0.005, 0.1);
                                tokio::time::sleep(Duration::from_secs_f64(wait)).await;
                            }
                        });
                    }
                    None if live_subtitle.peek().is_some() => {
                        live_subtitle.set(None);
                        live_lit.set(Vec::new());
                    }
                    _ => {}
                }
            }
        }
    });

    // Snapshot for rendering
    let current_time = clock.read().current_time();
    let is_playing = clock.read().is_playing();
    let placement = session.read().placement.clone();
    let video = session.read().video.clone();
    let subtitles: Vec<crate::state::Subtitle> =
        session.read().subtitles.iter().cloned().collect();
    let timeline_view = view.read().clone();

    // The caption currently under the playhead: live lit set while the
    // driver owns it, otherwise the stateless scrub lookup.
    let active = session.read().subtitles.subtitle_at(current_time).cloned();
    let active_id = active.as_ref().map(|sub| sub.id);
    let (words, lit) = match &active {
        Some(sub) => {
            let words: Vec<String> = sub.words().iter().map(|w| w.to_string()).collect();
            let lit = if is_playing && live_subtitle() == Some(sub.id) {
                live_lit()
            } else {
                word_states(words.len(), sub.start, sub.end, placement.animation, current_time)
            };
            (words, lit)
        }
        None => (Vec::new(), Vec::new()),
    };

    let track_width = track_metrics().map(|m| m.width).unwrap_or(0.0);
    let drag_active = drag.read().is_some();
    let drag_cursor = match &*drag.read() {
        Some(DragSession::Seek) | Some(DragSession::Boundary(_)) => "ew-resize",
        Some(DragSession::OverlayMove(_)) => "move",
        Some(DragSession::OverlayResize(resize)) => resize.handle().cursor(),
        None => "default",
    };
    let user_select = if drag_active { "none" } else { "auto" };

    // Pointer fraction along the track, for seek and boundary drags
    let pointer_fraction = move |client_x: f64| -> Option<f64> {
        let metrics = track_metrics()?;
        if metrics.width <= 0.0 {
            return None;
        }
        Some(((client_x - metrics.left) / metrics.width).clamp(0.0, 1.0))
    };

    // Pointer in design space, for overlay drags
    let pointer_design = move |client_x: f64, client_y: f64| -> Option<(f64, f64)> {
        let rect = surface_rect()?;
        Some(
            scale
                .peek()
                .point_to_design(client_x - rect.left, client_y - rect.top),
        )
    };

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            "#
        }

        div {
            class: "app-container",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
                user-select: {user_select};
                cursor: {drag_cursor};
            ",
            tabindex: "0",
            oncontextmenu: move |e| e.prevent_default(),

            onmousemove: move |e| {
                if drag.read().is_none() {
                    return;
                }
                e.prevent_default();
                let coords = e.client_coordinates();
                let mut drag_ref = drag.write();
                match drag_ref.as_mut() {
                    Some(DragSession::Seek) => {
                        if let Some(fraction) = pointer_fraction(coords.x) {
                            let now = clock.peek().current_time();
                            let target = view.peek().continue_seek(fraction, now);
                            clock.write().seek_seconds(target);
                        }
                    }
                    Some(DragSession::Boundary(boundary)) => {
                        if let Some(fraction) = pointer_fraction(coords.x) {
                            let now = clock.peek().current_time();
                            let candidate = view.peek().position_to_time(fraction, now);
                            let total = session.peek().duration();
                            boundary.continue_drag(
                                &mut session.write().subtitles,
                                candidate,
                                total,
                                Instant::now(),
                            );
                        }
                    }
                    Some(DragSession::OverlayMove(move_drag)) => {
                        if let Some(point) = pointer_design(coords.x, coords.y) {
                            let (container, size) = {
                                let s = session.peek();
                                (
                                    (s.video.width as f64, s.video.height as f64),
                                    (s.placement.width, s.placement.height),
                                )
                            };
                            let (left, top) = move_drag.continue_move(point, size, container);
                            let mut session_ref = session.write();
                            session_ref.placement.left = left;
                            session_ref.placement.top = top;
                        }
                    }
                    Some(DragSession::OverlayResize(resize_drag)) => {
                        if let Some(point) = pointer_design(coords.x, coords.y) {
                            let container = {
                                let s = session.peek();
                                (s.video.width as f64, s.video.height as f64)
                            };
                            let rect = resize_drag.continue_resize(
                                point,
                                (OVERLAY_MIN_WIDTH, OVERLAY_MIN_HEIGHT),
                                container,
                            );
                            let mut session_ref = session.write();
                            session_ref.placement.left = rect.left;
                            session_ref.placement.top = rect.top;
                            session_ref.placement.width = rect.width;
                            session_ref.placement.height = rect.height;
                        }
                    }
                    None => {}
                }
            },

            onmouseup: move |_| {
                let finished = drag.write().take();
                match finished {
                    Some(DragSession::Boundary(boundary)) => {
                        boundary.finish(&mut session.write().subtitles);
                        invalidate_animation();
                        save_session();
                    }
                    Some(DragSession::OverlayMove(_)) | Some(DragSession::OverlayResize(_)) => {
                        save_session();
                    }
                    Some(DragSession::Seek) | None => {}
                }
            },

            onkeydown: move |e: KeyboardEvent| {
                let hotkey_context = HotkeyContext {
                    input_focused: input_focused(),
                    drag_active: drag.read().is_some(),
                };
                let modifiers = e.modifiers();
                match handle_hotkey(
                    &e.key(),
                    modifiers.shift(),
                    modifiers.ctrl(),
                    modifiers.alt(),
                    modifiers.meta(),
                    &hotkey_context,
                ) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::PlayPause => {
                                clock.write().toggle();
                                invalidate_animation();
                            }
                            HotkeyAction::SkipBack => {
                                clock.write().skip(-crate::constants::SKIP_SECONDS);
                                invalidate_animation();
                            }
                            HotkeyAction::SkipForward => {
                                clock.write().skip(crate::constants::SKIP_SECONDS);
                                invalidate_animation();
                            }
                            HotkeyAction::StepBack => {
                                let frame = clock.peek().current_frame();
                                let mut clock_ref = clock.write();
                                clock_ref.pause();
                                clock_ref.seek_frame(frame - 1.0);
                                invalidate_animation();
                            }
                            HotkeyAction::StepForward => {
                                let frame = clock.peek().current_frame();
                                let mut clock_ref = clock.write();
                                clock_ref.pause();
                                clock_ref.seek_frame(frame + 1.0);
                                invalidate_animation();
                            }
                            HotkeyAction::TimelineZoomIn => view.write().zoom_by(10.0),
                            HotkeyAction::TimelineZoomOut => view.write().zoom_by(-10.0),
                            HotkeyAction::SaveSession => save_session(),
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            // Main row: preview + transcript
            div {
                style: "flex: 1; display: flex; min-height: 0;",

                PreviewPanel {
                    video: video.clone(),
                    placement: placement.clone(),
                    overlay_selected: overlay_selected(),
                    words,
                    lit,
                    scale: scale.read().factor(),
                    on_overlay_down: move |(x, y): (f64, f64)| {
                        overlay_selected.set(true);
                        if drag.peek().is_some() {
                            return;
                        }
                        if let Some(point) = pointer_design(x, y) {
                            let p = session.peek().placement.clone();
                            let rect = Rect::new(p.left, p.top, p.width, p.height);
                            drag.set(Some(DragSession::OverlayMove(MoveDrag::begin(rect, point))));
                        }
                    },
                    on_handle_down: move |(handle, (x, y))| {
                        if drag.peek().is_some() {
                            return;
                        }
                        if let Some(point) = pointer_design(x, y) {
                            let p = session.peek().placement.clone();
                            let rect = Rect::new(p.left, p.top, p.width, p.height);
                            drag.set(Some(DragSession::OverlayResize(ResizeDrag::begin(
                                handle, rect, point,
                            ))));
                        }
                    },
                    on_background_down: move |_| {
                        overlay_selected.set(false);
                        selected_subtitle.set(None);
                    },
                    on_style_change: move |style_id| {
                        session.write().placement.style_id = style_id;
                        save_session();
                    },
                    on_animation_change: move |mode| {
                        session.write().placement.animation = mode;
                        invalidate_animation();
                        save_session();
                    },
                    on_font_change: move |family| {
                        session.write().placement.font_family = family;
                        save_session();
                    },
                    on_font_size_change: move |size: f64| {
                        session.write().placement.font_size = size.clamp(8.0, 200.0);
                        save_session();
                    },
                    on_italic_toggle: move |_| {
                        let italic = session.peek().placement.italic;
                        session.write().placement.italic = !italic;
                        save_session();
                    },
                    on_color_change: move |color| {
                        session.write().placement.color = color;
                        save_session();
                    },
                }

                div {
                    style: "width: {PANEL_DEFAULT_WIDTH}px; flex-shrink: 0;",
                    TranscriptPanel {
                        subtitles: subtitles.clone(),
                        active_id,
                        on_seek: move |time| {
                            clock.write().seek_seconds(time);
                            invalidate_animation();
                        },
                        on_text_change: move |(id, text): (u32, String)| {
                            session.write().subtitles.set_text(id, text);
                            invalidate_animation();
                        },
                        on_remove: move |id| {
                            session.write().subtitles.remove(id);
                            if selected_subtitle() == Some(id) {
                                selected_subtitle.set(None);
                            }
                            invalidate_animation();
                            save_session();
                        },
                        on_split: move |id| {
                            let time = clock.peek().current_time();
                            session.write().subtitles.split_at(id, time);
                            invalidate_animation();
                            save_session();
                        },
                        on_add: move |_| {
                            let time = clock.peek().current_time();
                            let total = session.peek().duration();
                            let added = session.write().subtitles.add_after(
                                time,
                                NEW_SUBTITLE_SECONDS,
                                total,
                            );
                            if let Some(id) = added {
                                selected_subtitle.set(Some(id));
                                invalidate_animation();
                                save_session();
                            }
                        },
                        on_open_transcript: move |_| {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("Transcript", &["json"])
                                .pick_file()
                            {
                                match load_transcript(&path) {
                                    Ok(list) => {
                                        session.write().subtitles = list;
                                        selected_subtitle.set(None);
                                        invalidate_animation();
                                        save_session();
                                    }
                                    Err(err) => {
                                        eprintln!(
                                            "[TRANSCRIPT WARN] Failed to load {}: {}",
                                            path.display(),
                                            err
                                        );
                                    }
                                }
                            }
                        },
                        on_input_focus: move |focused: bool| {
                            input_focused.set(focused);
                            // Text edits commit when the input blurs.
                            if !focused {
                                save_session();
                            }
                        },
                    }
                }
            }

            // Timeline
            div {
                style: "height: {TIMELINE_HEIGHT}px; flex-shrink: 0; border-top: 1px solid {BORDER_DEFAULT};",
                TimelinePanel {
                    view: timeline_view,
                    subtitles,
                    current_time,
                    duration,
                    is_playing,
                    selected_subtitle: selected_subtitle(),
                    on_seek_down: move |fraction| {
                        overlay_selected.set(false);
                        selected_subtitle.set(None);
                        if drag.peek().is_some() {
                            return;
                        }
                        let now = clock.peek().current_time();
                        let target = view.peek().begin_seek(fraction, now);
                        clock.write().seek_seconds(target);
                        invalidate_animation();
                        drag.set(Some(DragSession::Seek));
                    },
                    on_seek: move |time| {
                        clock.write().seek_seconds(time);
                        invalidate_animation();
                    },
                    on_skip: move |delta| {
                        clock.write().skip(delta);
                        invalidate_animation();
                    },
                    on_play_pause: move |_| {
                        clock.write().toggle();
                        invalidate_animation();
                    },
                    on_zoom_change: move |level| view.write().set_zoom(level),
                    on_select: move |id| selected_subtitle.set(Some(id)),
                    on_boundary_down: move |(id, handle)| {
                        if drag.peek().is_some() {
                            return;
                        }
                        let begun = BoundaryDrag::begin(&session.peek().subtitles, id, handle);
                        if let Some(boundary) = begun {
                            drag.set(Some(DragSession::Boundary(boundary)));
                        }
                    },
                    track_width,
                }
            }
        }
    }
}
