//! Canonical due-date parsing and formatting.
//!
//! # Responsibility
//! - Pin the canonical persisted timestamp form (RFC 3339, milliseconds, UTC
//!   `Z` suffix) and the human-readable display form for share text.
//! - Classify persisted strings without ever failing hard; a malformed value
//!   is reported, not raised.
//!
//! # Invariants
//! - `parse_due_date(format_due_date(ts))` yields `Set(ts)` (millisecond
//!   precision).
//! - The empty string is the only encoding of "no due date".

use chrono::{DateTime, SecondsFormat, Utc};

/// Display pattern used in share text, e.g. "Mon, 16 Jan".
const DISPLAY_FORMAT: &str = "%a, %-d %b";

/// Outcome of parsing a persisted due-date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDateParse {
    /// Empty string: the note has no due date.
    Absent,
    /// Valid canonical timestamp.
    Set(DateTime<Utc>),
    /// Unparseable text. Callers treat this as absent and may log it.
    Malformed,
}

/// Parses a persisted due-date string.
pub fn parse_due_date(raw: &str) -> DueDateParse {
    if raw.is_empty() {
        return DueDateParse::Absent;
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => DueDateParse::Set(parsed.with_timezone(&Utc)),
        Err(_) => DueDateParse::Malformed,
    }
}

/// Formats a due date in its canonical persisted form.
pub fn format_due_date(due: DateTime<Utc>) -> String {
    due.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Formats a due date for human-readable output ("weekday, day month").
pub fn format_due_date_display(due: DateTime<Utc>) -> String {
    due.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_due_date, format_due_date_display, parse_due_date, DueDateParse};
    use chrono::{TimeZone, Utc};

    #[test]
    fn empty_string_means_absent() {
        assert_eq!(parse_due_date(""), DueDateParse::Absent);
    }

    #[test]
    fn canonical_string_round_trips() {
        let due = Utc.with_ymd_and_hms(2026, 1, 16, 0, 0, 0).unwrap();
        let canonical = format_due_date(due);
        assert_eq!(canonical, "2026-01-16T00:00:00.000Z");
        assert_eq!(parse_due_date(&canonical), DueDateParse::Set(due));
    }

    #[test]
    fn offset_timestamps_normalize_to_utc() {
        let parsed = parse_due_date("2026-01-16T02:30:00.000+02:30");
        let expected = Utc.with_ymd_and_hms(2026, 1, 16, 0, 0, 0).unwrap();
        assert_eq!(parsed, DueDateParse::Set(expected));
    }

    #[test]
    fn garbage_is_malformed_not_an_error() {
        assert_eq!(parse_due_date("next tuesday"), DueDateParse::Malformed);
        assert_eq!(parse_due_date("2026-13-45"), DueDateParse::Malformed);
    }

    #[test]
    fn display_format_is_weekday_day_month() {
        // 2026-01-16 is a Friday.
        let due = Utc.with_ymd_and_hms(2026, 1, 16, 0, 0, 0).unwrap();
        assert_eq!(format_due_date_display(due), "Fri, 16 Jan");
    }
}
