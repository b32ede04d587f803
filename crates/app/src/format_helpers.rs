/// Shared formatting utilities for the UI layer.
use chrono::{DateTime, Utc};
use shared_types::format_rate;

/// Format a timestamp as "Oct 18, 2026".
///
/// Missing timestamps render as "unknown date".
pub fn format_date_human(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%b %-d, %Y").to_string(),
        None => "unknown date".to_string(),
    }
}

/// Format a crop rate as "₹150.5 per unit".
pub fn format_rate_label(rate: f64) -> String {
    format!("₹{} per unit", format_rate(rate))
}
