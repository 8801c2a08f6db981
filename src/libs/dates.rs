//! Date and time helpers shared by the model, the repository and the commands.
//!
//! All timestamps are local naive date-times truncated to microseconds. The
//! storage form is ISO-8601 with a fixed six-digit fraction, so comparing the
//! stored text gives the same order as comparing the instants.

use super::error::{Error, Result};
use super::messages::Message;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound};

/// Storage format: `2025-01-15T09:30:00.000000`.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Accepted user input formats carrying a time of day.
const INPUT_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Accepted user input format for a bare calendar day.
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Current local time at microsecond precision.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

pub fn to_iso(datetime: &NaiveDateTime) -> String {
    datetime.format(ISO_FORMAT).to_string()
}

/// Last second of `date`; a due date given without a time means "by the end of that day".
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN))
}

/// Parses a user-supplied date or date-time.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS]` and `YYYY-MM-DDTHH:MM[:SS]`.
/// A bare day resolves to [`end_of_day`].
pub fn parse_input(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();

    for format in INPUT_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(datetime);
        }
    }

    NaiveDate::parse_from_str(input, INPUT_DATE_FORMAT)
        .map(end_of_day)
        .map_err(|_| Error::Validation(Message::InvalidDateInput(input.to_string())))
}

/// Like [`parse_input`], but blank input means "no date".
pub fn parse_optional_input(input: &str) -> Result<Option<NaiveDateTime>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_input(input).map(Some)
}
