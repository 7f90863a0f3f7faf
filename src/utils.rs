//! Small parsing and formatting helpers shared across panels.

/// Parse a text input as f64, falling back when empty or invalid.
pub fn parse_f64_input(value: &str, fallback: f64) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed.parse::<f64>().unwrap_or(fallback)
}

/// Format a time as MM:SS.s for the playback readout.
pub fn format_time(time_seconds: f64) -> String {
    let time_seconds = time_seconds.max(0.0);
    let minutes = (time_seconds / 60.0).floor() as u64;
    let seconds = time_seconds % 60.0;
    format!("{:02}:{:04.1}", minutes, seconds)
}

/// Format a time marker label: "12s" below a minute, "1m30s" above.
pub fn format_marker(time_seconds: f64) -> String {
    let time_seconds = time_seconds.max(0.0);
    if time_seconds >= 60.0 {
        let minutes = (time_seconds / 60.0).floor() as u64;
        let seconds = time_seconds % 60.0;
        if seconds.abs() < 0.05 {
            return format!("{}m", minutes);
        }
        return format!("{}m{}s", minutes, round_sig(seconds));
    }
    format!("{}s", round_sig(time_seconds))
}

/// Format a transcript timestamp as M:SS.cc.
pub fn format_timestamp(time_seconds: f64) -> String {
    let total_ms = (time_seconds.max(0.0) * 1000.0).floor() as u64;
    let minutes = total_ms / 60_000;
    let seconds = (total_ms % 60_000) / 1000;
    let centis = (total_ms % 1000) / 10;
    format!("{}:{:02}.{:02}", minutes, seconds, centis)
}

// Two significant digits, trailing zeros dropped.
fn round_sig(value: f64) -> String {
    let rounded = if value >= 10.0 {
        value.round()
    } else {
        (value * 10.0).round() / 10.0
    };
    if (rounded - rounded.round()).abs() < f64::EPSILON {
        format!("{}", rounded.round() as i64)
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "00:00.0");
        assert_eq!(format_time(65.25), "01:05.2");
    }

    #[test]
    fn test_format_marker_seconds() {
        assert_eq!(format_marker(12.0), "12s");
        assert_eq!(format_marker(1.5), "1.5s");
    }

    #[test]
    fn test_format_marker_minutes() {
        assert_eq!(format_marker(60.0), "1m");
        assert_eq!(format_marker(90.0), "1m30s");
    }

    #[test]
    fn test_parse_f64_fallback() {
        assert_eq!(parse_f64_input("", 3.0), 3.0);
        assert_eq!(parse_f64_input("abc", 3.0), 3.0);
        assert_eq!(parse_f64_input(" 2.5 ", 3.0), 2.5);
    }
}
