use chrono::{Datelike, NaiveDate};

use crate::parse_date::parse_date;

/// Minimum duration a segment is ever assigned, in months.
pub const MIN_DURATION_MONTHS: u32 = 1;

/// A computed segment duration with any warning produced along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentDuration {
    /// Duration in whole months, floored at [`MIN_DURATION_MONTHS`].
    pub months: u32,
    /// Set when the inputs were invalid or looked swapped.
    pub warning: Option<String>,
}

/// Whole-month distance from `a` to `b`, ignoring days.
pub(crate) fn months_between(a: NaiveDate, b: NaiveDate) -> i32 {
    (b.year() - a.year()) * 12 + (b.month() as i32 - a.month() as i32)
}

/// Calculates the duration in months between two date tokens.
///
/// Malformed or reversed ranges never fail: they degrade to a minimal
/// one-month duration with a warning, so degenerate segments still occupy
/// visible space on the timeline.
///
/// # Examples
///
/// ```
/// # use careerbar_core::duration::duration_months;
/// let d = duration_months("2023-01", "2023-06");
/// assert_eq!(d.months, 5);
/// assert!(d.warning.is_none());
///
/// let swapped = duration_months("2023-06", "2023-01");
/// assert_eq!(swapped.months, 1);
/// assert!(swapped.warning.is_some());
/// ```
pub fn duration_months(start: &str, end: &str) -> SegmentDuration {
    let start_parsed = parse_date(start);
    let end_parsed = parse_date(end);

    if !start_parsed.is_valid || !end_parsed.is_valid {
        let detail = format!(
            "{} {}",
            start_parsed.error.as_deref().unwrap_or(""),
            end_parsed.error.as_deref().unwrap_or("")
        );
        return SegmentDuration {
            months: MIN_DURATION_MONTHS,
            warning: Some(format!("Invalid date(s): {}", detail.trim())),
        };
    }

    if start_parsed.date > end_parsed.date {
        return SegmentDuration {
            months: MIN_DURATION_MONTHS,
            warning: Some(format!(
                "Start date ({start}) is after end date ({end}). Dates may be swapped."
            )),
        };
    }

    let months = months_between(start_parsed.date, end_parsed.date);

    // Same-month start and end counts as one month, never zero.
    SegmentDuration {
        months: months.max(MIN_DURATION_MONTHS as i32) as u32,
        warning: None,
    }
}
