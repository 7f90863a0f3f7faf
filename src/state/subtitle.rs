use serde::{Deserialize, Serialize};

/// A single subtitle entry supplied by the transcription service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtitle {
    /// Unique, stable identifier
    pub id: u32,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds (always > start after a commit)
    pub end: f64,
    /// Caption text
    pub text: String,
    /// Mean log-probability from the transcriber; low values mark
    /// low-confidence entries in the transcript panel.
    #[serde(default)]
    pub avg_logprob: Option<f64>,
}

impl Subtitle {
    /// Create a new subtitle entry
    pub fn new(id: u32, start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            id,
            start,
            end,
            text: text.into(),
            avg_logprob: None,
        }
    }

    /// Length of the interval in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether a time falls inside the half-open interval [start, end)
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time < self.end
    }

    /// Caption text broken into words
    pub fn words(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }
}

/// The subtitle collection for one editing session.
///
/// The vector is not kept physically sorted; adjacency queries sort by
/// start time on demand so drag clamping always sees the true neighbors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubtitleList {
    entries: Vec<Subtitle>,
}

impl SubtitleList {
    /// Build a list from existing entries
    pub fn from_entries(entries: Vec<Subtitle>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subtitle> {
        self.entries.iter()
    }

    /// Find an entry by id
    pub fn get(&self, id: u32) -> Option<&Subtitle> {
        self.entries.iter().find(|s| s.id == id)
    }

    /// Entry ids ordered by start time
    pub fn sorted_ids(&self) -> Vec<u32> {
        let mut ids: Vec<(u32, f64)> = self.entries.iter().map(|s| (s.id, s.start)).collect();
        ids.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        ids.into_iter().map(|(id, _)| id).collect()
    }

    /// Time-adjacent neighbors of an entry: (previous, next) by start time
    pub fn neighbors(&self, id: u32) -> (Option<&Subtitle>, Option<&Subtitle>) {
        let order = self.sorted_ids();
        let Some(index) = order.iter().position(|&other| other == id) else {
            return (None, None);
        };
        let prev = index
            .checked_sub(1)
            .and_then(|i| order.get(i))
            .and_then(|&pid| self.get(pid));
        let next = order.get(index + 1).and_then(|&nid| self.get(nid));
        (prev, next)
    }

    /// The entry whose interval contains a time, if any
    pub fn subtitle_at(&self, time: f64) -> Option<&Subtitle> {
        self.entries.iter().find(|s| s.contains(time))
    }

    /// Overwrite an entry's interval. The caller is responsible for
    /// clamping; this is the raw write used by the boundary drag engine.
    pub fn retime(&mut self, id: u32, start: f64, end: f64) -> bool {
        if let Some(subtitle) = self.entries.iter_mut().find(|s| s.id == id) {
            subtitle.start = start;
            subtitle.end = end;
            return true;
        }
        false
    }

    /// Replace an entry's text
    pub fn set_text(&mut self, id: u32, text: impl Into<String>) -> bool {
        if let Some(subtitle) = self.entries.iter_mut().find(|s| s.id == id) {
            subtitle.text = text.into();
            return true;
        }
        false
    }

    /// Remove an entry by id
    pub fn remove(&mut self, id: u32) -> bool {
        let len = self.entries.len();
        self.entries.retain(|s| s.id != id);
        self.entries.len() < len
    }

    /// Next unused id (max + 1)
    pub fn next_id(&self) -> u32 {
        self.entries.iter().map(|s| s.id).max().map_or(0, |id| id + 1)
    }

    /// Insert a new empty entry in the free gap at or after `time`.
    ///
    /// The entry starts where the occupying subtitle (if any) ends and
    /// runs until the next subtitle or `default_duration`, whichever is
    /// shorter. Returns the new id, or None when no usable gap exists.
    pub fn add_after(&mut self, time: f64, default_duration: f64, total_duration: f64) -> Option<u32> {
        const MIN_GAP_SECONDS: f64 = 0.2;

        let start = match self.subtitle_at(time) {
            Some(current) => current.end,
            None => time.max(0.0),
        };
        let next_start = self
            .entries
            .iter()
            .filter(|s| s.start >= start)
            .map(|s| s.start)
            .fold(total_duration, f64::min);
        let end = (start + default_duration).min(next_start).min(total_duration);
        if end - start < MIN_GAP_SECONDS {
            return None;
        }

        let id = self.next_id();
        self.entries.push(Subtitle::new(id, start, end, ""));
        Some(id)
    }

    /// Split an entry into two at an interior time; the text divides at
    /// the word boundary nearest the elapsed fraction. Returns the id of
    /// the new (second) entry.
    pub fn split_at(&mut self, id: u32, time: f64) -> Option<u32> {
        let index = self.entries.iter().position(|s| s.id == id)?;
        let subtitle = &self.entries[index];
        if time <= subtitle.start || time >= subtitle.end {
            return None;
        }

        let words = subtitle.words();
        let fraction = (time - subtitle.start) / subtitle.duration();
        let pivot = if words.len() < 2 {
            words.len()
        } else {
            ((words.len() as f64 * fraction).round() as usize).clamp(1, words.len() - 1)
        };
        let first_text = words[..pivot].join(" ");
        let second_text = words[pivot..].join(" ");
        let end = subtitle.end;
        let logprob = subtitle.avg_logprob;

        let new_id = self.next_id();
        {
            let subtitle = &mut self.entries[index];
            subtitle.end = time;
            subtitle.text = first_text;
        }
        let mut second = Subtitle::new(new_id, time, end, second_text);
        second.avg_logprob = logprob;
        self.entries.push(second);
        Some(new_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SubtitleList {
        SubtitleList::from_entries(vec![
            Subtitle::new(0, 0.0, 2.0, "hello there"),
            Subtitle::new(1, 5.0, 8.0, "general kenobi"),
            Subtitle::new(2, 2.0, 5.0, "you are"),
        ])
    }

    #[test]
    fn test_sorted_ids_follow_start_times() {
        assert_eq!(sample().sorted_ids(), vec![0, 2, 1]);
    }

    #[test]
    fn test_neighbors_are_time_adjacent() {
        let list = sample();
        let (prev, next) = list.neighbors(2);
        assert_eq!(prev.unwrap().id, 0);
        assert_eq!(next.unwrap().id, 1);

        let (prev, next) = list.neighbors(0);
        assert!(prev.is_none());
        assert_eq!(next.unwrap().id, 2);
    }

    #[test]
    fn test_subtitle_at_uses_half_open_interval() {
        let list = sample();
        assert_eq!(list.subtitle_at(0.0).unwrap().id, 0);
        assert_eq!(list.subtitle_at(2.0).unwrap().id, 2);
        assert!(list.subtitle_at(9.0).is_none());
    }

    #[test]
    fn test_add_after_fills_gap() {
        let mut list = SubtitleList::from_entries(vec![
            Subtitle::new(0, 0.0, 2.0, "a"),
            Subtitle::new(1, 6.0, 8.0, "b"),
        ]);
        let id = list.add_after(1.0, 2.0, 10.0).unwrap();
        let added = list.get(id).unwrap();
        assert_eq!(added.start, 2.0);
        assert_eq!(added.end, 4.0);
    }

    #[test]
    fn test_add_after_clamps_to_next_subtitle() {
        let mut list = SubtitleList::from_entries(vec![
            Subtitle::new(0, 0.0, 2.0, "a"),
            Subtitle::new(1, 3.0, 8.0, "b"),
        ]);
        let id = list.add_after(1.0, 2.0, 10.0).unwrap();
        assert_eq!(list.get(id).unwrap().end, 3.0);
    }

    #[test]
    fn test_add_after_rejects_too_small_gap() {
        let mut list = SubtitleList::from_entries(vec![
            Subtitle::new(0, 0.0, 2.0, "a"),
            Subtitle::new(1, 2.1, 8.0, "b"),
        ]);
        assert!(list.add_after(1.0, 2.0, 10.0).is_none());
    }

    #[test]
    fn test_split_divides_interval_and_words() {
        let mut list = SubtitleList::from_entries(vec![Subtitle::new(
            0,
            0.0,
            4.0,
            "one two three four",
        )]);
        let new_id = list.split_at(0, 2.0).unwrap();
        let first = list.get(0).unwrap();
        let second = list.get(new_id).unwrap();
        assert_eq!(first.end, 2.0);
        assert_eq!(second.start, 2.0);
        assert_eq!(second.end, 4.0);
        assert_eq!(first.text, "one two");
        assert_eq!(second.text, "three four");
    }

    #[test]
    fn test_split_rejects_boundary_times() {
        let mut list = SubtitleList::from_entries(vec![Subtitle::new(0, 1.0, 4.0, "a b")]);
        assert!(list.split_at(0, 1.0).is_none());
        assert!(list.split_at(0, 4.0).is_none());
    }
}
