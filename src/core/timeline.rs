//! Timeline engine.
//!
//! Owns the zoom level and the derived visible time window, the affine
//! mapping between time and display position, and the two timeline
//! gestures: drag-to-seek and subtitle boundary dragging with neighbor
//! clamping. The UI layer wires pointer events to `begin`/`continue`/
//! `finish`; no event-system types appear here.

use std::time::{Duration, Instant};

use crate::constants::{BOUNDARY_WRITE_INTERVAL_MS, MIN_VISIBLE_SECONDS, TIME_MARKER_COUNT};
use crate::state::SubtitleList;

/// Smallest interval a boundary drag will leave a subtitle with.
/// Keeps `start < end` strictly true on every write.
const MIN_SUBTITLE_SECONDS: f64 = 0.01;

/// Zoom and window state for the timeline strip.
///
/// `zoom_level` runs 0..=100: 0 shows a two-second window, 100 shows the
/// full duration exactly. The window recenters around the playhead.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineView {
    zoom_level: f64,
    total_duration: f64,
}

impl TimelineView {
    /// Create a view over a video, fully zoomed out
    pub fn new(total_duration: f64) -> Self {
        Self {
            zoom_level: 100.0,
            total_duration: total_duration.max(0.0),
        }
    }

    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Set the zoom level, clamped to 0..=100
    pub fn set_zoom(&mut self, level: f64) {
        self.zoom_level = level.clamp(0.0, 100.0);
    }

    /// Nudge the zoom level by a signed step
    pub fn zoom_by(&mut self, delta: f64) {
        self.set_zoom(self.zoom_level + delta);
    }

    /// Seconds spanned by the visible window at the current zoom.
    ///
    /// Level 100 returns the full duration exactly rather than going
    /// through the interpolation, so the fully-zoomed-out window never
    /// drifts from the video length by a rounding step.
    pub fn visible_duration(&self) -> f64 {
        if self.zoom_level >= 100.0 {
            return self.total_duration;
        }
        let span = MIN_VISIBLE_SECONDS
            + (self.total_duration - MIN_VISIBLE_SECONDS) * self.zoom_level / 100.0;
        span.min(self.total_duration)
    }

    /// The visible `[start, end]` time range, recentered around the
    /// playhead in proportion to its position in the full video and
    /// clamped inside `[0, total_duration]`.
    pub fn visible_window(&self, current_time: f64) -> (f64, f64) {
        let visible = self.visible_duration();
        if visible >= self.total_duration {
            return (0.0, self.total_duration);
        }
        let ratio = if self.total_duration > 0.0 {
            (current_time / self.total_duration).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let mut start = (current_time - visible * ratio).max(0.0);
        let end = (start + visible).min(self.total_duration);
        if end - start < visible {
            start = (end - visible).max(0.0);
        }
        (start, end)
    }

    /// Map a time to a display position as a percentage of the strip.
    /// Times outside the window clamp to 0 or 100, never extrapolate.
    pub fn time_to_position(&self, time: f64, current_time: f64) -> f64 {
        let (start, end) = self.visible_window(current_time);
        if end <= start || time <= start {
            return 0.0;
        }
        if time >= end {
            return 100.0;
        }
        (time - start) / (end - start) * 100.0
    }

    /// Map a display fraction (0..=1 across the strip) back to a time
    /// inside the visible window.
    pub fn position_to_time(&self, fraction: f64, current_time: f64) -> f64 {
        let (start, end) = self.visible_window(current_time);
        start + fraction.clamp(0.0, 1.0) * (end - start)
    }

    /// Seven evenly spaced instants across the visible window for the
    /// axis labels. Display-only; carries no state.
    pub fn time_markers(&self, current_time: f64) -> Vec<f64> {
        let (start, end) = self.visible_window(current_time);
        let intervals = (TIME_MARKER_COUNT - 1) as f64;
        (0..TIME_MARKER_COUNT)
            .map(|i| start + (end - start) * i as f64 / intervals)
            .collect()
    }

    /// Time under the pointer when a seek drag begins. The caller seeks
    /// the clock immediately and opens the seek session.
    pub fn begin_seek(&self, fraction: f64, current_time: f64) -> f64 {
        self.position_to_time(fraction, current_time)
    }

    /// Time under the pointer on each move of an active seek drag; the
    /// caller reseeks the clock every move, so ending the drag needs no
    /// extra commit.
    pub fn continue_seek(&self, fraction: f64, current_time: f64) -> f64 {
        self.position_to_time(fraction, current_time)
    }
}

/// Which edge of a subtitle a boundary drag grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryHandle {
    Start,
    End,
}

/// Gesture context for dragging one subtitle boundary.
///
/// Captures the entry's pre-gesture interval and the adjacent neighbor's
/// opposing edge at `begin` time; every `continue_drag` clamps the
/// pointer time against those. Intermediate writes to the shared list
/// are throttled; `finish` always applies the last value.
#[derive(Debug, Clone)]
pub struct BoundaryDrag {
    subtitle_id: u32,
    handle: BoundaryHandle,
    own_start: f64,
    own_end: f64,
    prev_end: Option<f64>,
    next_start: Option<f64>,
    last_write: Option<Instant>,
    last_value: f64,
}

impl BoundaryDrag {
    /// Open a drag session on a subtitle edge. Returns None when the id
    /// is unknown.
    pub fn begin(subtitles: &SubtitleList, subtitle_id: u32, handle: BoundaryHandle) -> Option<Self> {
        let subtitle = subtitles.get(subtitle_id)?;
        let (prev, next) = subtitles.neighbors(subtitle_id);
        let last_value = match handle {
            BoundaryHandle::Start => subtitle.start,
            BoundaryHandle::End => subtitle.end,
        };
        Some(Self {
            subtitle_id,
            handle,
            own_start: subtitle.start,
            own_end: subtitle.end,
            prev_end: prev.map(|s| s.end),
            next_start: next.map(|s| s.start),
            last_write: None,
            last_value,
        })
    }

    pub fn subtitle_id(&self) -> u32 {
        self.subtitle_id
    }

    pub fn handle(&self) -> BoundaryHandle {
        self.handle
    }

    /// Clamp a candidate time for this edge.
    ///
    /// Order matters: the own opposite edge first (keeps the interval
    /// positive), then the absolute bound, then the neighbor edge. The
    /// neighbor wins over the raw pointer position, and because a
    /// neighbor edge never crosses the own opposite edge the result
    /// always leaves `start < end`.
    pub fn clamp_candidate(&self, candidate: f64, total_duration: f64) -> f64 {
        match self.handle {
            BoundaryHandle::Start => {
                let mut time = candidate.min(self.own_end - MIN_SUBTITLE_SECONDS).max(0.0);
                if let Some(prev_end) = self.prev_end {
                    time = time.max(prev_end);
                }
                time
            }
            BoundaryHandle::End => {
                let mut time = candidate
                    .max(self.own_start + MIN_SUBTITLE_SECONDS)
                    .min(total_duration);
                if let Some(next_start) = self.next_start {
                    time = time.min(next_start);
                }
                time
            }
        }
    }

    /// Process a pointer move. Clamps the candidate time and writes it
    /// to the shared list at most once per 50 ms of wall clock; returns
    /// whether a write happened. The clamped value is retained either
    /// way so `finish` commits the most recent pointer position.
    pub fn continue_drag(
        &mut self,
        subtitles: &mut SubtitleList,
        candidate: f64,
        total_duration: f64,
        now: Instant,
    ) -> bool {
        self.last_value = self.clamp_candidate(candidate, total_duration);
        let due = match self.last_write {
            None => true,
            Some(last) => now.duration_since(last) >= Duration::from_millis(BOUNDARY_WRITE_INTERVAL_MS),
        };
        if !due {
            return false;
        }
        self.last_write = Some(now);
        self.apply(subtitles);
        true
    }

    /// Close the session: apply the final value unthrottled and return
    /// the committed interval for the persistence write.
    pub fn finish(self, subtitles: &mut SubtitleList) -> (f64, f64) {
        self.apply(subtitles);
        match self.handle {
            BoundaryHandle::Start => (self.last_value, self.own_end),
            BoundaryHandle::End => (self.own_start, self.last_value),
        }
    }

    fn apply(&self, subtitles: &mut SubtitleList) {
        match self.handle {
            BoundaryHandle::Start => {
                subtitles.retime(self.subtitle_id, self.last_value, self.own_end);
            }
            BoundaryHandle::End => {
                subtitles.retime(self.subtitle_id, self.own_start, self.last_value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Subtitle;

    fn list() -> SubtitleList {
        SubtitleList::from_entries(vec![
            Subtitle::new(0, 0.0, 5.0, "first"),
            Subtitle::new(1, 6.0, 10.0, "second"),
            Subtitle::new(2, 11.0, 14.0, "third"),
        ])
    }

    #[test]
    fn test_visible_duration_monotonic_in_zoom() {
        let mut view = TimelineView::new(120.0);
        let mut previous = 0.0;
        for level in 0..=100 {
            view.set_zoom(level as f64);
            let visible = view.visible_duration();
            assert!(visible >= previous, "zoom {} shrank the window", level);
            previous = visible;
        }
    }

    #[test]
    fn test_full_zoom_is_exact() {
        let view = TimelineView::new(123.456);
        assert_eq!(view.visible_duration(), 123.456);
        assert_eq!(view.visible_window(60.0), (0.0, 123.456));
    }

    #[test]
    fn test_min_zoom_centers_on_playhead() {
        let mut view = TimelineView::new(120.0);
        view.set_zoom(0.0);
        assert_eq!(view.visible_duration(), MIN_VISIBLE_SECONDS);
        let (start, end) = view.visible_window(60.0);
        assert!((start - 59.0).abs() < 1e-9);
        assert!((end - 61.0).abs() < 1e-9);
    }

    #[test]
    fn test_window_clamps_at_edges() {
        let mut view = TimelineView::new(120.0);
        view.set_zoom(0.0);
        let (start, _) = view.visible_window(0.0);
        assert_eq!(start, 0.0);
        let (_, end) = view.visible_window(120.0);
        assert_eq!(end, 120.0);
    }

    #[test]
    fn test_affine_round_trip() {
        let mut view = TimelineView::new(100.0);
        view.set_zoom(40.0);
        let current = 30.0;
        for t in [10.0, 25.0, 30.0, 38.0] {
            let (start, end) = view.visible_window(current);
            if t < start || t > end {
                continue;
            }
            let position = view.time_to_position(t, current);
            let back = view.position_to_time(position / 100.0, current);
            assert!((back - t).abs() < 1e-9, "round trip drifted for t={}", t);
        }
    }

    #[test]
    fn test_position_clamps_outside_window() {
        let mut view = TimelineView::new(120.0);
        view.set_zoom(0.0);
        assert_eq!(view.time_to_position(0.0, 60.0), 0.0);
        assert_eq!(view.time_to_position(120.0, 60.0), 100.0);
    }

    #[test]
    fn test_exactly_seven_markers() {
        let view = TimelineView::new(120.0);
        let markers = view.time_markers(0.0);
        assert_eq!(markers.len(), 7);
        assert_eq!(markers[0], 0.0);
        assert_eq!(*markers.last().unwrap(), 120.0);
    }

    #[test]
    fn test_start_handle_clamps_to_previous_end() {
        let subtitles = list();
        let drag = BoundaryDrag::begin(&subtitles, 1, BoundaryHandle::Start).unwrap();
        // Proposed start crosses into the previous subtitle: neighbor wins.
        assert_eq!(drag.clamp_candidate(4.2, 14.0), 5.0);
    }

    #[test]
    fn test_end_handle_clamps_to_next_start() {
        let subtitles = list();
        let drag = BoundaryDrag::begin(&subtitles, 1, BoundaryHandle::End).unwrap();
        assert_eq!(drag.clamp_candidate(12.5, 14.0), 11.0);
    }

    #[test]
    fn test_clamp_preserves_positive_interval() {
        let subtitles = list();
        let drag = BoundaryDrag::begin(&subtitles, 1, BoundaryHandle::Start).unwrap();
        // Dragging far right stops short of the end edge.
        let clamped = drag.clamp_candidate(99.0, 14.0);
        assert!(clamped < 10.0);

        let drag = BoundaryDrag::begin(&subtitles, 0, BoundaryHandle::End).unwrap();
        let clamped = drag.clamp_candidate(-99.0, 14.0);
        assert!(clamped > 0.0);
    }

    #[test]
    fn test_continue_drag_throttles_writes() {
        let mut subtitles = list();
        let mut drag = BoundaryDrag::begin(&subtitles, 1, BoundaryHandle::End).unwrap();
        let t0 = Instant::now();

        assert!(drag.continue_drag(&mut subtitles, 9.0, 14.0, t0));
        // 10ms later: inside the gate, value retained but not written.
        assert!(!drag.continue_drag(&mut subtitles, 8.0, 14.0, t0 + Duration::from_millis(10)));
        assert_eq!(subtitles.get(1).unwrap().end, 9.0);
        // 60ms later: gate reopens.
        assert!(drag.continue_drag(&mut subtitles, 8.5, 14.0, t0 + Duration::from_millis(60)));
        assert_eq!(subtitles.get(1).unwrap().end, 8.5);
    }

    #[test]
    fn test_finish_applies_last_value_unthrottled() {
        let mut subtitles = list();
        let mut drag = BoundaryDrag::begin(&subtitles, 1, BoundaryHandle::End).unwrap();
        let t0 = Instant::now();
        drag.continue_drag(&mut subtitles, 9.0, 14.0, t0);
        // Swallowed by the throttle, but must survive to the commit.
        drag.continue_drag(&mut subtitles, 8.0, 14.0, t0 + Duration::from_millis(10));

        let (start, end) = drag.finish(&mut subtitles);
        assert_eq!((start, end), (6.0, 8.0));
        assert_eq!(subtitles.get(1).unwrap().end, 8.0);
    }

    #[test]
    fn test_drag_sequences_keep_invariants() {
        let mut subtitles = list();
        let total = 14.0;
        let gestures = [
            (0, BoundaryHandle::End, 7.5_f64),
            (1, BoundaryHandle::Start, 2.0),
            (1, BoundaryHandle::End, 13.0),
            (2, BoundaryHandle::Start, 8.0),
            (0, BoundaryHandle::Start, 6.0),
        ];
        for (id, handle, target) in gestures {
            let mut drag = BoundaryDrag::begin(&subtitles, id, handle).unwrap();
            drag.continue_drag(&mut subtitles, target, total, Instant::now());
            drag.finish(&mut subtitles);

            // Every interval stays positive.
            for subtitle in subtitles.iter() {
                assert!(subtitle.start < subtitle.end, "empty interval: {:?}", subtitle);
            }
            // Adjacent entries never overlap.
            let order = subtitles.sorted_ids();
            for pair in order.windows(2) {
                let a = subtitles.get(pair[0]).unwrap();
                let b = subtitles.get(pair[1]).unwrap();
                assert!(a.end <= b.start + 1e-9, "overlap: {:?} vs {:?}", a, b);
            }
        }
    }
}
