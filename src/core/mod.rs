pub mod clock;
pub mod overlay;
pub mod scale;
pub mod schedule;
pub mod style;
pub mod timeline;
