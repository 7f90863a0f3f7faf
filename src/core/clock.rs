//! Frame-based playback clock.
//!
//! Stands in for the external player: position is a frame counter, time
//! is derived from it, and `seek_*` is the single write path. The app
//! drives `advance` from a tick loop while playing. Seeks snap to whole
//! frames; `advance` accumulates fractional frames, since a tick is
//! usually shorter than a frame and rounding each tick away would stall
//! playback.

/// Playback position and transport state for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    fps: f64,
    duration_seconds: f64,
    frame: f64,
    playing: bool,
}

impl FrameClock {
    /// Create a paused clock at frame zero
    pub fn new(fps: f64, duration_seconds: f64) -> Self {
        Self {
            fps: fps.max(1.0),
            duration_seconds: duration_seconds.max(0.0),
            frame: 0.0,
            playing: false,
        }
    }

    /// Current position in seconds
    pub fn current_time(&self) -> f64 {
        self.frame / self.fps
    }

    /// Current position in frames
    pub fn current_frame(&self) -> f64 {
        self.frame
    }

    /// Total duration in seconds
    pub fn duration(&self) -> f64 {
        self.duration_seconds
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Toggle playback; restarts from the top when at the end
    pub fn toggle(&mut self) {
        if !self.playing && self.current_time() >= self.duration_seconds {
            self.frame = 0.0;
        }
        self.playing = !self.playing;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Seek to a time in seconds, snapped to the nearest frame and
    /// clamped to the playable range. The single write path for position.
    pub fn seek_seconds(&mut self, time_seconds: f64) {
        let clamped = time_seconds.clamp(0.0, self.duration_seconds);
        self.frame = (clamped * self.fps).round();
    }

    /// Seek to an exact frame, clamped to the playable range
    pub fn seek_frame(&mut self, frame: f64) {
        let max_frame = self.duration_seconds * self.fps;
        self.frame = frame.clamp(0.0, max_frame).round();
    }

    /// Jump by a signed number of seconds
    pub fn skip(&mut self, delta_seconds: f64) {
        self.seek_seconds(self.current_time() + delta_seconds);
    }

    /// Advance by elapsed wall-clock time while playing. Pauses at the
    /// end of the video. The frame counter stays fractional here; only
    /// seeks snap it.
    pub fn advance(&mut self, delta_seconds: f64) {
        if !self.playing {
            return;
        }
        let next = self.current_time() + delta_seconds.max(0.0);
        if next >= self.duration_seconds {
            self.frame = self.duration_seconds * self.fps;
            self.playing = false;
        } else {
            self.frame = next * self.fps;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_snaps_to_frame() {
        let mut clock = FrameClock::new(30.0, 10.0);
        clock.seek_seconds(1.016);
        assert_eq!(clock.current_frame(), 30.0);
        clock.seek_seconds(1.017);
        assert_eq!(clock.current_frame(), 31.0);
    }

    #[test]
    fn test_seek_clamps_to_duration() {
        let mut clock = FrameClock::new(30.0, 10.0);
        clock.seek_seconds(99.0);
        assert_eq!(clock.current_time(), 10.0);
        clock.seek_seconds(-5.0);
        assert_eq!(clock.current_time(), 0.0);
    }

    #[test]
    fn test_advance_accumulates_sub_frame_ticks() {
        // A 16 ms tick at 30 fps is about half a frame. Accumulation
        // must not round each tick away, or playback never moves.
        let mut clock = FrameClock::new(30.0, 20.0);
        clock.toggle();
        for _ in 0..625 {
            clock.advance(0.016);
        }
        assert!(clock.is_playing());
        assert!((clock.current_time() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_advance_stops_at_end() {
        let mut clock = FrameClock::new(30.0, 1.0);
        clock.toggle();
        clock.advance(0.5);
        assert!(clock.is_playing());
        clock.advance(10.0);
        assert!(!clock.is_playing());
        assert_eq!(clock.current_time(), 1.0);
    }

    #[test]
    fn test_toggle_at_end_restarts() {
        let mut clock = FrameClock::new(30.0, 1.0);
        clock.seek_seconds(1.0);
        clock.toggle();
        assert!(clock.is_playing());
        assert_eq!(clock.current_time(), 0.0);
    }

    #[test]
    fn test_advance_ignored_while_paused() {
        let mut clock = FrameClock::new(30.0, 10.0);
        clock.advance(1.0);
        assert_eq!(clock.current_time(), 0.0);
    }
}
