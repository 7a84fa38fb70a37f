use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted date tokens: `YYYY-MM` with a month of 01..12.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(0[1-9]|1[0-2])$").expect("valid regex"));

/// Earliest year considered plausible for a career segment.
pub const MIN_YEAR: i32 = 1900;
/// Latest year considered plausible for a career segment.
pub const MAX_YEAR: i32 = 2100;

/// The result of parsing a date token, which never fails outright.
///
/// When parsing fails, `date` still holds today's date so callers can keep
/// computing; they branch on `is_valid`, never on a missing value.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDate {
    /// The parsed date (first of the month), or today as fallback.
    pub date: NaiveDate,
    /// Whether the token was a well-formed date or the `Present` sentinel.
    pub is_valid: bool,
    /// Whether the token was the `Present` sentinel.
    pub is_present: bool,
    /// The trimmed original input.
    pub original: String,
    /// Error message when `is_valid` is false.
    pub error: Option<String>,
}

/// Parses a date token into a [`ParsedDate`] with validation.
///
/// Understands the `YYYY-MM` format and the `Present` keyword
/// (case-insensitive). Years outside `1900..=2100` are rejected.
///
/// # Examples
///
/// ```
/// # use careerbar_core::parse_date::parse_date;
/// let parsed = parse_date("2023-06");
/// assert!(parsed.is_valid);
/// assert!(!parsed.is_present);
///
/// let present = parse_date("Present");
/// assert!(present.is_valid);
/// assert!(present.is_present);
///
/// let bad = parse_date("june 2023");
/// assert!(!bad.is_valid);
/// assert!(bad.error.is_some());
/// ```
pub fn parse_date(token: &str) -> ParsedDate {
    let today = Local::now().date_naive();
    let trimmed = token.trim();

    if trimmed.is_empty() {
        return ParsedDate {
            date: today,
            is_valid: false,
            is_present: false,
            original: trimmed.to_string(),
            error: Some("Date string is empty".to_string()),
        };
    }

    if trimmed.eq_ignore_ascii_case("present") {
        return ParsedDate {
            date: today,
            is_valid: true,
            is_present: true,
            original: trimmed.to_string(),
            error: None,
        };
    }

    let Some(caps) = DATE_PATTERN.captures(trimmed) else {
        return ParsedDate {
            date: today,
            is_valid: false,
            is_present: false,
            original: trimmed.to_string(),
            error: Some(format!(
                "Invalid date format \"{trimmed}\". Expected \"YYYY-MM\" (e.g., \"2023-06\")"
            )),
        };
    };

    let year: i32 = caps[1].parse().unwrap_or(0);
    let month: u32 = caps[2].parse().unwrap_or(1);

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return ParsedDate {
            date: today,
            is_valid: false,
            is_present: false,
            original: trimmed.to_string(),
            error: Some(format!(
                "Year {year} is out of reasonable range ({MIN_YEAR}-{MAX_YEAR})"
            )),
        };
    }

    ParsedDate {
        // The pattern and range checks guarantee a representable date.
        date: NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(today),
        is_valid: true,
        is_present: false,
        original: trimmed.to_string(),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn valid_tokens_round_trip() {
        let p = parse_date("2023-06");
        assert!(p.is_valid);
        assert!(!p.is_present);
        assert_eq!(p.date, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(p.original, "2023-06");
        assert!(p.error.is_none());

        let p = parse_date("1900-01");
        assert!(p.is_valid);
        assert_eq!((p.date.year(), p.date.month()), (1900, 1));

        let p = parse_date("2100-12");
        assert!(p.is_valid);
        assert_eq!((p.date.year(), p.date.month()), (2100, 12));
    }

    #[test]
    fn whitespace_is_trimmed() {
        let p = parse_date("  2023-06  ");
        assert!(p.is_valid);
        assert_eq!(p.original, "2023-06");
    }

    #[test]
    fn present_is_case_insensitive() {
        for token in ["Present", "present", "PRESENT", " pReSeNt "] {
            let p = parse_date(token);
            assert!(p.is_valid, "{token}");
            assert!(p.is_present, "{token}");
        }
    }

    #[test]
    fn present_uses_current_date() {
        // Bracket the clock read instead of asserting exact equality.
        let before = Local::now().date_naive();
        let p = parse_date("Present");
        let after = Local::now().date_naive();
        assert!(p.date >= before && p.date <= after);
    }

    #[test]
    fn malformed_tokens_are_invalid() {
        for token in [
            "", "   ", "2023", "2023-6", "2023-13", "2023-00", "06-2023", "2023/06", "june 2023",
            "2023-06-01",
        ] {
            let p = parse_date(token);
            assert!(!p.is_valid, "{token:?} should be invalid");
            assert!(!p.is_present, "{token:?}");
            assert!(p.error.is_some(), "{token:?} should carry an error");
        }
    }

    #[test]
    fn invalid_tokens_still_carry_a_date() {
        let before = Local::now().date_naive();
        let p = parse_date("nonsense");
        let after = Local::now().date_naive();
        assert!(!p.is_valid);
        assert!(p.date >= before && p.date <= after);
    }

    #[test]
    fn years_outside_range_are_rejected() {
        let p = parse_date("1899-12");
        assert!(!p.is_valid);
        assert!(p.error.as_deref().unwrap().contains("1899"));

        let p = parse_date("2101-01");
        assert!(!p.is_valid);
        assert!(p.error.as_deref().unwrap().contains("2101"));
    }

    #[test]
    fn format_error_mentions_expected_shape() {
        let p = parse_date("2023/06");
        assert!(p.error.as_deref().unwrap().contains("YYYY-MM"));
    }
}
