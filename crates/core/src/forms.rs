//! Field-level validation for the admin and submission forms.
//!
//! Checks run before any request is issued (and again at the API boundary
//! before any query). Failures are field-scoped and independent: every
//! failing check reports, nothing short-circuits, except that date ordering
//! is only meaningful once both dates resolved.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Regex matching a YouTube video identifier: eleven characters from the
/// id alphabet.
static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("valid regex"));

/// A date entered through separate year/month/day selects.
///
/// Unset selects arrive as `None`. A date is usable only when all three
/// parts are present and form a real calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DateParts {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl DateParts {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        }
    }

    /// The calendar date, or `None` when a part is missing or the
    /// combination does not exist (Feb 31, Apr 31, Feb 29 off leap years).
    pub fn resolve(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year?, self.month?, self.day?)
    }
}

/// A field-scoped validation failure, shown next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Resolved date pair of a valid event form. Both `None` without a duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventDates {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Validate an event create/edit form.
///
/// With `has_duration` off the date inputs are ignored entirely. With it
/// on, both dates must be complete and calendar-valid and the start must
/// not fall after the end.
pub fn validate_event_form(
    name: &str,
    has_duration: bool,
    start: &DateParts,
    end: &DateParts,
) -> Result<EventDates, Vec<FieldError>> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }

    let mut dates = EventDates::default();
    if has_duration {
        match validate_event_dates(start, end) {
            Ok(resolved) => dates = resolved,
            Err(mut date_errors) => errors.append(&mut date_errors),
        }
    }

    if errors.is_empty() {
        Ok(dates)
    } else {
        Err(errors)
    }
}

/// Validate just the date pair of an event form.
///
/// Both dates must be complete and calendar-valid; ordering is checked
/// only once both resolve.
pub fn validate_event_dates(
    start: &DateParts,
    end: &DateParts,
) -> Result<EventDates, Vec<FieldError>> {
    let mut errors = Vec::new();
    let start_date = start.resolve();
    let end_date = end.resolve();

    if start_date.is_none() {
        errors.push(FieldError::new("start_date", "Start date is invalid"));
    }
    if end_date.is_none() {
        errors.push(FieldError::new("end_date", "End date is invalid"));
    }
    if let (Some(start_date), Some(end_date)) = (start_date, end_date) {
        if start_date > end_date {
            errors.push(FieldError::new(
                "end_date",
                "End date must be after start date",
            ));
        }
    }

    if errors.is_empty() {
        Ok(EventDates {
            start: start_date,
            end: end_date,
        })
    } else {
        Err(errors)
    }
}

/// Validate a guide submission form.
pub fn validate_guide_form(title: &str, video_id: &str) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if title.trim().is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    }
    if !video_id_is_valid(video_id.trim()) {
        errors.push(FieldError::new("video_id", "Video id is invalid"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether a string is a well-formed YouTube video identifier.
///
/// This is a shape check only; it does not confirm the video exists.
pub fn video_id_is_valid(video_id: &str) -> bool {
    VIDEO_ID_RE.is_match(video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> DateParts {
        DateParts::default()
    }

    fn messages_for<'a>(errors: &'a [FieldError], field: &str) -> Vec<&'a str> {
        errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    #[test]
    fn name_only_form_is_valid_without_duration() {
        let dates = validate_event_form("Operation Dusk", false, &blank(), &blank()).unwrap();
        assert_eq!(dates, EventDates::default());
    }

    #[test]
    fn blank_name_is_rejected() {
        let errors = validate_event_form("   ", false, &blank(), &blank()).unwrap_err();
        assert_eq!(messages_for(&errors, "name"), vec!["Name is required"]);
    }

    #[test]
    fn dates_are_ignored_when_duration_is_off() {
        // Nonsense dates must not matter while the toggle is off.
        let garbage = DateParts::new(2024, 2, 31);
        let dates = validate_event_form("Event", false, &garbage, &garbage).unwrap();
        assert_eq!(dates, EventDates::default());
    }

    #[test]
    fn february_31st_is_invalid() {
        let errors =
            validate_event_form("Event", true, &DateParts::new(2024, 2, 31), &DateParts::new(2024, 3, 1))
                .unwrap_err();
        assert_eq!(messages_for(&errors, "start_date"), vec!["Start date is invalid"]);
        assert!(messages_for(&errors, "end_date").is_empty());
    }

    #[test]
    fn day_31_in_a_30_day_month_is_invalid() {
        let errors =
            validate_event_form("Event", true, &DateParts::new(2024, 4, 1), &DateParts::new(2024, 4, 31))
                .unwrap_err();
        assert_eq!(messages_for(&errors, "end_date"), vec!["End date is invalid"]);
    }

    #[test]
    fn leap_day_is_valid_only_on_leap_years() {
        let leap = validate_event_form(
            "Event",
            true,
            &DateParts::new(2024, 2, 29),
            &DateParts::new(2024, 3, 1),
        );
        assert!(leap.is_ok());

        let non_leap = validate_event_form(
            "Event",
            true,
            &DateParts::new(2023, 2, 29),
            &DateParts::new(2023, 3, 1),
        );
        assert!(non_leap.is_err());
    }

    #[test]
    fn missing_parts_make_a_date_invalid() {
        let partial = DateParts {
            year: Some(2024),
            month: Some(5),
            day: None,
        };
        let errors =
            validate_event_form("Event", true, &partial, &DateParts::new(2024, 5, 10)).unwrap_err();
        assert_eq!(messages_for(&errors, "start_date"), vec!["Start date is invalid"]);
    }

    #[test]
    fn start_after_end_is_rejected() {
        let errors = validate_event_form(
            "Event",
            true,
            &DateParts::new(2024, 5, 10),
            &DateParts::new(2024, 5, 1),
        )
        .unwrap_err();
        assert_eq!(
            messages_for(&errors, "end_date"),
            vec!["End date must be after start date"]
        );
    }

    #[test]
    fn equal_start_and_end_are_allowed() {
        let dates = validate_event_form(
            "Event",
            true,
            &DateParts::new(2024, 5, 10),
            &DateParts::new(2024, 5, 10),
        )
        .unwrap();
        assert_eq!(dates.start, dates.end);
        assert!(dates.start.is_some());
    }

    #[test]
    fn independent_checks_all_report() {
        // Blank name and two broken dates: three failures in one pass.
        let errors = validate_event_form(
            "",
            true,
            &DateParts::new(2024, 13, 1),
            &DateParts::default(),
        )
        .unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(messages_for(&errors, "name"), vec!["Name is required"]);
        assert_eq!(messages_for(&errors, "start_date"), vec!["Start date is invalid"]);
        assert_eq!(messages_for(&errors, "end_date"), vec!["End date is invalid"]);
    }

    #[test]
    fn ordering_is_not_checked_unless_both_dates_resolve() {
        let errors = validate_event_form(
            "Event",
            true,
            &DateParts::new(2024, 5, 10),
            &DateParts::new(2024, 2, 31),
        )
        .unwrap_err();
        // Only the invalid end date reports; no ordering complaint on top.
        assert_eq!(errors.len(), 1);
        assert_eq!(messages_for(&errors, "end_date"), vec!["End date is invalid"]);
    }

    #[test]
    fn video_id_shapes() {
        assert!(video_id_is_valid("dQw4w9WgXcQ"));
        assert!(video_id_is_valid("abc-DEF_123"));
        assert!(!video_id_is_valid(""));
        assert!(!video_id_is_valid("too-short"));
        assert!(!video_id_is_valid("dQw4w9WgXcQQ"));
        assert!(!video_id_is_valid("dQw4w9WgXc!"));
    }

    #[test]
    fn guide_form_collects_both_failures() {
        let errors = validate_guide_form(" ", "nope").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(messages_for(&errors, "title"), vec!["Title is required"]);
        assert_eq!(messages_for(&errors, "video_id"), vec!["Video id is invalid"]);
    }

    #[test]
    fn guide_form_accepts_a_plain_submission() {
        assert!(validate_guide_form("S-5 low end clear", "dQw4w9WgXcQ").is_ok());
    }
}
