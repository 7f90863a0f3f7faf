//! Hotkey system
//!
//! Centralized key bindings for the editor. `HotkeyAction` enumerates
//! the semantic actions, `HotkeyContext` captures the app state that
//! gates them, and `handle_hotkey()` maps a key event to a result. The
//! app component executes the matched action; nothing here mutates
//! state.

use dioxus::prelude::Key;

/// All actions a hotkey can trigger.
///
/// Each variant is a semantic action, not a key binding; the binding
/// lives in `handle_hotkey()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Toggle playback.
    PlayPause,
    /// Jump the playhead back five seconds.
    SkipBack,
    /// Jump the playhead forward five seconds.
    SkipForward,
    /// Step the playhead one frame back.
    StepBack,
    /// Step the playhead one frame forward.
    StepForward,
    /// Raise the timeline zoom level (widen the visible window).
    TimelineZoomIn,
    /// Lower the timeline zoom level (narrow the visible window).
    TimelineZoomOut,
    /// Save the current session.
    SaveSession,
}

/// App state that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether a text input has focus (suppresses all bindings so
    /// typing a space or a minus edits text instead of seeking).
    pub input_focused: bool,
    /// Whether a drag gesture is in flight.
    pub drag_active: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A binding matched; the app should execute this action.
    Action(HotkeyAction),
    /// No binding for this key/context combination.
    NoMatch,
    /// A binding would match but the context suppresses it.
    Suppressed,
}

/// Maps a key event to an action under the current context.
pub fn handle_hotkey(
    key: &Key,
    _shift: bool,
    ctrl: bool,
    _alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    if context.input_focused || context.drag_active {
        return HotkeyResult::Suppressed;
    }

    match key {
        Key::Character(c) if (ctrl || meta) && (c == "s" || c == "S") => {
            HotkeyResult::Action(HotkeyAction::SaveSession)
        }
        Key::Character(c) if c == " " => HotkeyResult::Action(HotkeyAction::PlayPause),
        Key::Character(c) if c == "+" || c == "=" => {
            HotkeyResult::Action(HotkeyAction::TimelineZoomIn)
        }
        Key::Character(c) if c == "-" => HotkeyResult::Action(HotkeyAction::TimelineZoomOut),
        Key::Character(c) if c == "," => HotkeyResult::Action(HotkeyAction::StepBack),
        Key::Character(c) if c == "." => HotkeyResult::Action(HotkeyAction::StepForward),
        Key::ArrowLeft => HotkeyResult::Action(HotkeyAction::SkipBack),
        Key::ArrowRight => HotkeyResult::Action(HotkeyAction::SkipForward),
        _ => HotkeyResult::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key, ctrl: bool, ctx: &HotkeyContext) -> HotkeyResult {
        handle_hotkey(&key, false, ctrl, false, false, ctx)
    }

    #[test]
    fn test_space_toggles_playback() {
        let result = press(Key::Character(" ".to_string()), false, &HotkeyContext::default());
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::PlayPause)));
    }

    #[test]
    fn test_plus_and_minus_zoom() {
        let ctx = HotkeyContext::default();
        let result = press(Key::Character("+".to_string()), false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::TimelineZoomIn)));
        let result = press(Key::Character("-".to_string()), false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::TimelineZoomOut)));
    }

    #[test]
    fn test_ctrl_s_saves_session() {
        let result = press(Key::Character("s".to_string()), true, &HotkeyContext::default());
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::SaveSession)));
    }

    #[test]
    fn test_arrows_skip_playhead() {
        let ctx = HotkeyContext::default();
        let result = press(Key::ArrowLeft, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::SkipBack)));
        let result = press(Key::ArrowRight, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::SkipForward)));
    }

    #[test]
    fn test_suppressed_while_typing() {
        let ctx = HotkeyContext {
            input_focused: true,
            ..Default::default()
        };
        let result = press(Key::Character(" ".to_string()), false, &ctx);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }

    #[test]
    fn test_suppressed_during_drag() {
        let ctx = HotkeyContext {
            drag_active: true,
            ..Default::default()
        };
        let result = press(Key::Character("+".to_string()), false, &ctx);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }

    #[test]
    fn test_unbound_key_is_no_match() {
        let result = press(Key::Character("q".to_string()), false, &HotkeyContext::default());
        assert!(matches!(result, HotkeyResult::NoMatch));
    }
}
