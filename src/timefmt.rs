//! Playback time labels.
//!
//! Both labels on the plaque ("current" and "total") go through
//! [`format_mm_ss`] so they always share one style: minutes unpadded,
//! seconds zero-padded, no hour rollover.

/// Format whole seconds as `M:SS`.
pub fn format_mm_ss(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Parse an `M:SS` label into seconds. Anything malformed counts as zero.
pub fn parse_duration_label(label: &str) -> u32 {
    let mut parts = label.trim().split(':');
    let (Some(m), Some(s), None) = (parts.next(), parts.next(), parts.next()) else {
        return 0;
    };
    match (m.trim().parse::<u32>(), s.trim().parse::<u32>()) {
        (Ok(m), Ok(s)) => m.saturating_mul(60).saturating_add(s),
        _ => 0,
    }
}

/// Elapsed label for a progress fraction: `floor(total * progress)`.
///
/// `progress` is clamped so out-of-range values never reach the arithmetic.
pub fn current_time_label(total_seconds: u32, progress: f64) -> String {
    let p = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
    let elapsed = (total_seconds as f64 * p).floor() as u32;
    format_mm_ss(elapsed)
}

/// Normalise a duration label ("3:5" and "03:05" both become "3:05").
pub fn total_time_label(duration: &str) -> String {
    format_mm_ss(parse_duration_label(duration))
}

/// Convert an elapsed label such as `"2:30"` into a progress fraction of
/// `duration`. A zero or malformed duration gives `0.0`.
pub fn progress_from_time_label(elapsed: &str, duration: &str) -> f64 {
    let total = parse_duration_label(duration);
    if total == 0 {
        return 0.0;
    }
    (parse_duration_label(elapsed) as f64 / total as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_mm_ss(0), "0:00");
        assert_eq!(format_mm_ss(80), "1:20");
        assert_eq!(format_mm_ss(605), "10:05");
    }

    #[test]
    fn parses_labels() {
        assert_eq!(parse_duration_label("3:20"), 200);
        assert_eq!(parse_duration_label(" 0:07 "), 7);
        assert_eq!(parse_duration_label("abc"), 0);
        assert_eq!(parse_duration_label("3:xx"), 0);
        assert_eq!(parse_duration_label("1:02:03"), 0);
        assert_eq!(parse_duration_label(""), 0);
    }

    #[test]
    fn current_label_floors_elapsed() {
        assert_eq!(current_time_label(200, 0.4), "1:20");
        assert_eq!(current_time_label(199, 0.5), "1:39");
        assert_eq!(current_time_label(200, 1.3), "3:20");
        assert_eq!(current_time_label(0, 0.7), "0:00");
    }

    #[test]
    fn total_label_matches_current_style() {
        assert_eq!(total_time_label("3:5"), "3:05");
        assert_eq!(total_time_label("bogus"), "0:00");
        assert_eq!(total_time_label("3:20"), current_time_label(200, 1.0));
    }

    #[test]
    fn progress_from_elapsed_label() {
        assert_eq!(progress_from_time_label("1:00", "4:00"), 0.25);
        assert_eq!(progress_from_time_label("9:00", "4:00"), 1.0);
        assert_eq!(progress_from_time_label("1:00", "0:00"), 0.0);
    }
}
