//! Human-readable formatting for dates and long text in terminal output.
//!
//! ```rust
//! use tache::libs::formatter::{format_datetime, truncate};
//! use chrono::NaiveDate;
//!
//! let due = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(18, 0, 0).unwrap();
//! assert_eq!(format_datetime(&due), "2025-01-15 18:00");
//! assert_eq!(truncate("Prepare the quarterly report", 10), "Prepare t…");
//! ```

use chrono::NaiveDateTime;

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Second-precision form used to pre-fill prompts; accepted back by `dates::parse_input`.
pub const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder shown for an absent date.
pub const NO_DATE: &str = "-";

pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format(DISPLAY_FORMAT).to_string()
}

pub fn format_optional_datetime(datetime: Option<&NaiveDateTime>) -> String {
    datetime.map(format_datetime).unwrap_or_else(|| NO_DATE.to_string())
}

pub fn format_for_input(datetime: &NaiveDateTime) -> String {
    datetime.format(INPUT_FORMAT).to_string()
}

/// Shortens `text` to at most `max_chars` characters, ending with `…` when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}
