//! Shared UI constants such as colors, panel sizing, and engine tunables.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_SUBTITLE: &str = "#a76cfb";
pub const ACCENT_SUBTITLE_SELECTED: &str = "#5a06d1";
pub const ACCENT_PLAYHEAD: &str = "#2563eb";
pub const ACCENT_WARNING: &str = "#f97316";

// Panel dimensions
pub const PANEL_DEFAULT_WIDTH: f64 = 300.0;
pub const TIMELINE_HEIGHT: f64 = 140.0;
pub const SUBTITLE_BAR_HEIGHT: f64 = 32.0;

// Timeline engine
pub const MIN_VISIBLE_SECONDS: f64 = 2.0;
pub const TIME_MARKER_COUNT: usize = 7;
pub const BOUNDARY_WRITE_INTERVAL_MS: u64 = 50;

// Overlay engine
pub const OVERLAY_MIN_WIDTH: f64 = 200.0;
pub const OVERLAY_MIN_HEIGHT: f64 = 80.0;
pub const RESIZE_HANDLE_SIZE: f64 = 14.0;

// Word animation
pub const ANIMATION_RESTART_DELAY_SECONDS: f64 = 1.0;

// New subtitles inserted at the playhead get this duration
pub const NEW_SUBTITLE_SECONDS: f64 = 2.0;

// Transcript confidence tint
pub const LOW_CONFIDENCE_LOGPROB: f64 = -1.0;

// Playback clock
pub const CLOCK_TICK_INTERVAL_MS: u64 = 16;
pub const SKIP_SECONDS: f64 = 5.0;
pub const DEFAULT_FPS: f64 = 30.0;
