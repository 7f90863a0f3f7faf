//! Word animation scheduling.
//!
//! Each subtitle's words reveal on a uniform grid: `word_duration =
//! duration / word_count`. Two drivers share that grid. Scrubbing calls
//! the stateless [`word_states`] with the clock time and gets the lit set
//! back directly. Live playback builds a [`LiveSchedule`] of timed events
//! and replays them from an async loop; every build carries a generation
//! tag so timers from a superseded pass are ignored instead of mutating
//! state out of order.

use crate::constants::ANIMATION_RESTART_DELAY_SECONDS;
use crate::state::AnimationMode;

/// Lit words for a scrub position. Stateless; safe to call every render.
///
/// Highlight lights the single current word, Karaoke lights every word
/// seen so far. Before the subtitle nothing is lit; past its end
/// Highlight goes dark again while Karaoke stays fully revealed.
pub fn word_states(word_count: usize, start: f64, end: f64, mode: AnimationMode, time: f64) -> Vec<bool> {
    if word_count == 0 {
        return Vec::new();
    }
    let duration = end - start;
    let elapsed = time - start;
    if mode == AnimationMode::None {
        return vec![true; word_count];
    }
    if elapsed < 0.0 || duration <= 0.0 {
        return vec![false; word_count];
    }
    if elapsed >= duration {
        return match mode {
            AnimationMode::Highlight => vec![false; word_count],
            _ => vec![true; word_count],
        };
    }
    let word_duration = duration / word_count as f64;
    let active = ((elapsed / word_duration) as usize).min(word_count - 1);
    (0..word_count)
        .map(|i| match mode {
            AnimationMode::Highlight => i == active,
            _ => i <= active,
        })
        .collect()
}

/// One timed mutation of the lit set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScheduleEvent {
    Reveal(usize),
    Clear(usize),
    Reset,
}

impl ScheduleEvent {
    /// Apply this event to the lit set.
    pub fn apply(&self, states: &mut [bool]) {
        match *self {
            ScheduleEvent::Reveal(i) => {
                if let Some(s) = states.get_mut(i) {
                    *s = true;
                }
            }
            ScheduleEvent::Clear(i) => {
                if let Some(s) = states.get_mut(i) {
                    *s = false;
                }
            }
            ScheduleEvent::Reset => states.fill(false),
        }
    }
}

/// An event and its offset in seconds from the start of the cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedEvent {
    pub at: f64,
    pub event: ScheduleEvent,
}

/// Lifecycle of a live pass, per subtitle instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulePhase {
    /// Built but the first word has not revealed yet.
    Scheduled,
    /// Mid-cycle under Highlight (one word lit at a time).
    Cycling,
    /// Mid-cycle under Karaoke (lit set grows).
    Accumulating,
    /// All words played; waiting out the settle delay before looping.
    Settled,
}

/// One live scheduling pass: the full event list for a subtitle plus the
/// generation it was built under.
#[derive(Debug, Clone)]
pub struct LiveSchedule {
    generation: u64,
    mode: AnimationMode,
    word_count: usize,
    duration: f64,
    events: Vec<TimedEvent>,
}

impl LiveSchedule {
    /// Build the event list for one subtitle: a reveal per word on the
    /// uniform grid, a clear after each word under Highlight, and a
    /// trailing reset at the subtitle's duration.
    pub fn build(word_count: usize, duration: f64, mode: AnimationMode, generation: u64) -> Self {
        let mut events = Vec::new();
        if word_count > 0 && duration > 0.0 && mode != AnimationMode::None {
            let word_duration = duration / word_count as f64;
            for i in 0..word_count {
                events.push(TimedEvent {
                    at: i as f64 * word_duration,
                    event: ScheduleEvent::Reveal(i),
                });
            }
            if mode == AnimationMode::Highlight {
                for i in 0..word_count {
                    events.push(TimedEvent {
                        at: (i + 1) as f64 * word_duration,
                        event: ScheduleEvent::Clear(i),
                    });
                }
            }
            events.push(TimedEvent {
                at: duration,
                event: ScheduleEvent::Reset,
            });
            events.sort_by(|a, b| a.at.total_cmp(&b.at));
        }
        Self {
            generation,
            mode,
            word_count,
            duration,
            events,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// A schedule is stale once the app's generation counter has moved
    /// past the one it was built under. Stale timers drop their events.
    pub fn is_stale(&self, current_generation: u64) -> bool {
        self.generation != current_generation
    }

    pub fn events(&self) -> &[TimedEvent] {
        &self.events
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Full loop length for self-driven previews: the subtitle's duration
    /// plus the settle delay before the cycle restarts.
    pub fn cycle_length(&self) -> f64 {
        self.duration + ANIMATION_RESTART_DELAY_SECONDS
    }

    /// Where a self-driven preview is in its loop at `elapsed` seconds
    /// since the schedule was armed.
    pub fn phase(&self, elapsed: f64) -> SchedulePhase {
        if self.events.is_empty() {
            return SchedulePhase::Settled;
        }
        let in_cycle = elapsed.rem_euclid(self.cycle_length());
        if in_cycle >= self.duration {
            SchedulePhase::Settled
        } else if in_cycle == 0.0 {
            SchedulePhase::Scheduled
        } else if self.mode == AnimationMode::Highlight {
            SchedulePhase::Cycling
        } else {
            SchedulePhase::Accumulating
        }
    }

    /// Lit set after replaying every event at or before `elapsed` seconds
    /// into the current cycle. The live driver uses this after each sleep
    /// so a late wakeup catches up instead of skipping events.
    pub fn states_at(&self, elapsed: f64) -> Vec<bool> {
        let mut states = vec![false; self.word_count];
        let in_cycle = if elapsed >= self.cycle_length() {
            elapsed.rem_euclid(self.cycle_length())
        } else {
            elapsed
        };
        for timed in &self.events {
            if timed.at <= in_cycle {
                timed.event.apply(&mut states);
            }
        }
        states
    }

    /// Offset of the next event strictly after `elapsed` within the
    /// current cycle, or the start of the next cycle once events are
    /// exhausted. `None` when the schedule has no events at all.
    pub fn next_event_at(&self, elapsed: f64) -> Option<f64> {
        if self.events.is_empty() {
            return None;
        }
        let cycle = self.cycle_length();
        let cycles_done = (elapsed / cycle).floor();
        let in_cycle = elapsed - cycles_done * cycle;
        let base = cycles_done * cycle;
        for timed in &self.events {
            if timed.at > in_cycle {
                return Some(base + timed.at);
            }
        }
        Some(base + cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 4 words over [10, 14): word_duration = 1.0.
    const START: f64 = 10.0;
    const END: f64 = 14.0;
    const WORDS: usize = 4;

    #[test]
    fn test_scrub_karaoke_accumulates() {
        let states = word_states(WORDS, START, END, AnimationMode::Karaoke, 11.5);
        assert_eq!(states, vec![true, true, false, false]);
    }

    #[test]
    fn test_scrub_highlight_lights_one_word() {
        let states = word_states(WORDS, START, END, AnimationMode::Highlight, 11.5);
        assert_eq!(states, vec![false, true, false, false]);
    }

    #[test]
    fn test_scrub_before_start_is_dark() {
        for mode in [AnimationMode::Highlight, AnimationMode::Karaoke] {
            let states = word_states(WORDS, START, END, mode, 9.0);
            assert!(states.iter().all(|s| !s));
        }
    }

    #[test]
    fn test_scrub_past_end_depends_on_mode() {
        let highlight = word_states(WORDS, START, END, AnimationMode::Highlight, 14.0);
        assert!(highlight.iter().all(|s| !s));
        let karaoke = word_states(WORDS, START, END, AnimationMode::Karaoke, 14.0);
        assert!(karaoke.iter().all(|s| *s));
    }

    #[test]
    fn test_scrub_none_mode_shows_everything() {
        let states = word_states(WORDS, START, END, AnimationMode::None, 9.0);
        assert_eq!(states, vec![true; WORDS]);
    }

    #[test]
    fn test_scrub_sweep_visits_words_once_in_order() {
        // Sweeping the clock across the subtitle activates each word
        // exactly once, in index order.
        let mut visited = Vec::new();
        let mut t = START;
        while t < END {
            let states = word_states(WORDS, START, END, AnimationMode::Highlight, t);
            let active = states.iter().position(|s| *s).unwrap();
            if visited.last() != Some(&active) {
                visited.push(active);
            }
            t += 0.01;
        }
        assert_eq!(visited, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_live_karaoke_events() {
        let schedule = LiveSchedule::build(WORDS, END - START, AnimationMode::Karaoke, 1);
        // One reveal per word plus the trailing reset.
        assert_eq!(schedule.events().len(), WORDS + 1);
        assert_eq!(
            schedule.events()[0],
            TimedEvent {
                at: 0.0,
                event: ScheduleEvent::Reveal(0)
            }
        );
        assert_eq!(
            schedule.events().last().unwrap().event,
            ScheduleEvent::Reset
        );
    }

    #[test]
    fn test_live_highlight_has_one_word_lit() {
        let schedule = LiveSchedule::build(WORDS, END - START, AnimationMode::Highlight, 1);
        for t in [0.1, 1.1, 2.5, 3.9] {
            let lit = schedule.states_at(t).iter().filter(|s| **s).count();
            assert_eq!(lit, 1, "exactly one word lit at t={t}");
        }
    }

    #[test]
    fn test_live_replay_matches_scrub() {
        let schedule = LiveSchedule::build(WORDS, END - START, AnimationMode::Karaoke, 1);
        for t in [0.5, 1.5, 2.5, 3.5] {
            assert_eq!(
                schedule.states_at(t),
                word_states(WORDS, START, END, AnimationMode::Karaoke, START + t)
            );
        }
    }

    #[test]
    fn test_live_reset_and_settle_loop() {
        let schedule = LiveSchedule::build(WORDS, END - START, AnimationMode::Karaoke, 1);
        // At the subtitle's end the reset fires and the settle delay begins.
        assert!(schedule.states_at(4.0).iter().all(|s| !s));
        assert_eq!(schedule.phase(4.5), SchedulePhase::Settled);
        assert_eq!(schedule.cycle_length(), 5.0);
        // After the settle delay the cycle restarts from the first word.
        assert_eq!(schedule.states_at(5.5), vec![true, false, false, false]);
        assert_eq!(schedule.phase(5.5), SchedulePhase::Accumulating);
    }

    #[test]
    fn test_generation_staleness() {
        let schedule = LiveSchedule::build(WORDS, END - START, AnimationMode::Karaoke, 3);
        assert!(!schedule.is_stale(3));
        assert!(schedule.is_stale(4));
    }

    #[test]
    fn test_next_event_walks_the_grid() {
        let schedule = LiveSchedule::build(WORDS, END - START, AnimationMode::Karaoke, 1);
        assert_eq!(schedule.next_event_at(0.0), Some(1.0));
        assert_eq!(schedule.next_event_at(3.5), Some(4.0));
        // After the reset the next wakeup is the start of the next cycle.
        assert_eq!(schedule.next_event_at(4.0), Some(5.0));
    }

    #[test]
    fn test_empty_or_degenerate_input() {
        assert!(word_states(0, START, END, AnimationMode::Karaoke, 11.0).is_empty());
        let schedule = LiveSchedule::build(0, 4.0, AnimationMode::Highlight, 1);
        assert!(schedule.events().is_empty());
        assert_eq!(schedule.next_event_at(0.0), None);
        assert_eq!(schedule.phase(1.0), SchedulePhase::Settled);
    }
}
