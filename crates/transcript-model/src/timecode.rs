//! Timecode parsing and formatting.
//!
//! Two string families are handled here:
//! - Clock strings (`HH:MM:SS`, `MM:SS`, or a bare seconds value) used for
//!   segment boundaries and jump input
//! - Caption timestamps with a millisecond field (`HH:MM:SS,mmm` for SRT,
//!   `HH:MM:SS.mmm` for VTT) used by the export formatters
//!
//! Parsing never fails hard: an input with no usable numeric structure
//! yields `None`, and callers decide whether to ignore or surface it.

/// Parse a human-entered timecode into seconds.
///
/// Accepts `HH:MM:SS`, `H:MM:SS`, `MM:SS`, or a bare integer/decimal
/// seconds value, with surrounding whitespace tolerated:
///
/// ```
/// use subline_transcript_model::timecode::parse_timecode;
///
/// assert_eq!(parse_timecode("01:24"), Some(84.0));
/// assert_eq!(parse_timecode(" 84 "), Some(84.0));
/// assert_eq!(parse_timecode("abc"), None);
/// ```
pub fn parse_timecode(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains(':') {
        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() > 3 {
            return None;
        }
        let mut total = 0.0;
        for part in parts {
            let value: f64 = part.trim().parse().ok()?;
            if !value.is_finite() {
                return None;
            }
            total = total * 60.0 + value;
        }
        Some(total)
    } else {
        trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// Format seconds as a zero-padded `HH:MM:SS` clock string.
///
/// Fractional seconds are floor-truncated. The hours field grows
/// unbounded past 24h; there is no day rollover.
pub fn format_timecode(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Format seconds as an SRT caption timestamp: `HH:MM:SS,mmm`.
pub fn format_caption_time(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0) as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}

/// Format seconds as a WebVTT caption timestamp: `HH:MM:SS.mmm`.
pub fn format_vtt_time(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0) as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{hours:02}:{minutes:02}:{secs:02}.{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_clock_strings() {
        assert_eq!(parse_timecode("00:00:00"), Some(0.0));
        assert_eq!(parse_timecode("00:01:24"), Some(84.0));
        assert_eq!(parse_timecode("01:24"), Some(84.0));
        assert_eq!(parse_timecode("1:00:00"), Some(3600.0));
        assert_eq!(parse_timecode("25:00:00"), Some(90_000.0));
    }

    #[test]
    fn test_parse_bare_seconds() {
        assert_eq!(parse_timecode("84"), Some(84.0));
        assert_eq!(parse_timecode("84.5"), Some(84.5));
        assert_eq!(parse_timecode("0"), Some(0.0));
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        assert_eq!(parse_timecode("  00:00:18 "), Some(18.0));
        assert_eq!(parse_timecode("\t42\n"), Some(42.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_timecode(""), None);
        assert_eq!(parse_timecode("   "), None);
        assert_eq!(parse_timecode("abc"), None);
        assert_eq!(parse_timecode("00:xx:00"), None);
        assert_eq!(parse_timecode("1:2:3:4"), None);
        assert_eq!(parse_timecode("12:"), None);
    }

    #[test]
    fn test_format_timecode() {
        assert_eq!(format_timecode(0.0), "00:00:00");
        assert_eq!(format_timecode(84.0), "00:01:24");
        assert_eq!(format_timecode(84.9), "00:01:24");
        assert_eq!(format_timecode(3661.0), "01:01:01");
    }

    #[test]
    fn test_format_timecode_past_24_hours() {
        // Hours keep counting instead of wrapping at a day boundary.
        assert_eq!(format_timecode(90_000.0), "25:00:00");
        assert_eq!(format_timecode(360_000.0), "100:00:00");
    }

    #[test]
    fn test_format_caption_time() {
        assert_eq!(format_caption_time(0.0), "00:00:00,000");
        assert_eq!(format_caption_time(3.0), "00:00:03,000");
        assert_eq!(format_caption_time(3661.5), "01:01:01,500");
    }

    #[test]
    fn test_format_vtt_time() {
        assert_eq!(format_vtt_time(0.0), "00:00:00.000");
        assert_eq!(format_vtt_time(3661.5), "01:01:01.500");
    }

    proptest! {
        #[test]
        fn parse_inverts_format_for_whole_seconds(s in 0u64..10_000_000) {
            let formatted = format_timecode(s as f64);
            prop_assert_eq!(parse_timecode(&formatted), Some(s as f64));
        }

        #[test]
        fn parse_of_format_floors_fractional_input(s in 0.0f64..1_000_000.0) {
            let formatted = format_timecode(s);
            prop_assert_eq!(parse_timecode(&formatted), Some(s.floor()));
        }
    }
}
