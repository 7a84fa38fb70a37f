//! Pure presentation helpers: proportional widths and human-readable
//! duration/date strings. No I/O; the CLI decides how to print them.

use crate::parse_date::parse_date;
use crate::segment::ProcessedSegment;

/// Minimum visual width so tiny segments never become imperceptible.
pub const MIN_VISUAL_WIDTH_PERCENT: f64 = 2.0;

/// Options for [`format_date`].
#[derive(Clone, Copy)]
pub struct DateFormatOptions<'a> {
    /// Show full month names (`June 2023`) instead of abbreviated (`Jun 2023`).
    pub full_month: bool,
    /// A custom formatter that takes precedence over the built-in formatting.
    pub formatter: Option<&'a dyn Fn(&str) -> String>,
}

impl Default for DateFormatOptions<'_> {
    fn default() -> Self {
        Self {
            full_month: false,
            formatter: None,
        }
    }
}

/// Sums the durations of all segments. Zero for an empty list.
pub fn total_duration(segments: &[ProcessedSegment]) -> u32 {
    segments.iter().map(|s| s.duration).sum()
}

/// Proportional width of a segment as a percentage of the whole bar.
///
/// Floored at `min_width_percent`; zero when `total` is zero so an empty
/// timeline never divides by zero.
pub fn segment_width(duration: u32, total: u32, min_width_percent: f64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let natural = duration as f64 / total as f64 * 100.0;
    natural.max(min_width_percent)
}

/// Formats a month count like `1 yr 3 mos` or `6 mos`.
///
/// # Examples
///
/// ```
/// # use careerbar_core::render::format_duration;
/// assert_eq!(format_duration(12), "1 yr");
/// assert_eq!(format_duration(13), "1 yr 1 mo");
/// assert_eq!(format_duration(0), "< 1 mo");
/// ```
pub fn format_duration(months: u32) -> String {
    if months < 1 {
        return "< 1 mo".to_string();
    }

    let years = months / 12;
    let remaining = months % 12;

    let mut parts = Vec::new();
    if years > 0 {
        parts.push(format!("{years} yr{}", if years > 1 { "s" } else { "" }));
    }
    if remaining > 0 {
        parts.push(format!(
            "{remaining} mo{}",
            if remaining > 1 { "s" } else { "" }
        ));
    }

    if parts.is_empty() {
        // Unreachable given the guard above; defined fallback regardless.
        "1 mo".to_string()
    } else {
        parts.join(" ")
    }
}

/// Formats a date token for display, e.g. `Jun 2023`.
///
/// The `Present` sentinel renders literally; a custom formatter in the
/// options takes precedence; tokens that fail to parse come back unchanged.
pub fn format_date(token: &str, options: Option<DateFormatOptions>) -> String {
    if token.eq_ignore_ascii_case("present") {
        return "Present".to_string();
    }

    let options = options.unwrap_or_default();
    if let Some(formatter) = options.formatter {
        return formatter(token);
    }

    let parsed = parse_date(token);
    if !parsed.is_valid {
        return token.to_string();
    }

    let pattern = if options.full_month { "%B %Y" } else { "%b %Y" };
    parsed.date.format(pattern).to_string()
}
