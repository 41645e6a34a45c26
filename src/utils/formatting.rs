//! Text formatting utilities for the demo viewer.

/// Formats a Unix timestamp in milliseconds as a UTC `HH:MM:SS` time of day.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_time_of_day(0), "00:00:00");
/// assert_eq!(format_time_of_day(3_723_000), "01:02:03");
/// ```
pub fn format_time_of_day(time_ms: i64) -> String {
    let secs_of_day = time_ms.div_euclid(1000).rem_euclid(86_400);
    format!(
        "{:02}:{:02}:{:02}",
        secs_of_day / 3600,
        (secs_of_day % 3600) / 60,
        secs_of_day % 60
    )
}

/// Formats a duration in milliseconds using the largest whole unit.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_span(90_000), "1m 30s");
/// assert_eq!(format_span(7_200_000), "2h 0m");
/// ```
pub fn format_span(span_ms: i64) -> String {
    let secs = span_ms.max(0) / 1000;
    if secs >= 3600 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}s", secs)
    }
}
