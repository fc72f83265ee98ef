//! Duration helpers: whole days and human readable spans.

use chrono::Duration;

/// Whole days in `d`, remainder below 24 hours dropped.
pub fn whole_days(d: Duration) -> i64 {
    d.num_days()
}

/// Formats a duration as `Nd HHh MMm`, e.g. `5d 03h 20m`.
pub fn format_span(d: Duration) -> String {
    let days = d.num_days();
    let hours = d.num_hours() - days * 24;
    let minutes = d.num_minutes() - d.num_hours() * 60;
    format!("{}d {:02}h {:02}m", days, hours, minutes)
}
