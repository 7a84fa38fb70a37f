use serde::{Deserialize, Serialize};

/// A single period of a career timeline, as supplied by the caller.
///
/// String fields default to empty when missing from a segments file, so the
/// validator can report them instead of deserialization failing.
///
/// # Examples
///
/// ```
/// # use careerbar_core::CareerSegment;
/// let segment = CareerSegment {
///     start: "2023-01".into(),
///     end: "Present".into(),
///     label: "Current Company".into(),
///     role: "Software Engineer".into(),
///     color: "#f59e0b".into(),
///     ..Default::default()
/// };
/// assert_eq!(segment.end, "Present");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerSegment {
    /// Start date in `YYYY-MM` format.
    #[serde(default)]
    pub start: String,
    /// End date in `YYYY-MM` format, or `Present` for an ongoing period.
    #[serde(default)]
    pub end: String,
    /// Organization or period label.
    #[serde(default)]
    pub label: String,
    /// Job title or role.
    #[serde(default)]
    pub role: String,
    /// Hex color for the segment (e.g. `#3b82f6`).
    #[serde(default)]
    pub color: String,
    /// Optional description shown on hover/tooltips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional icon or emoji for the segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A segment enriched with computed values, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedSegment {
    /// The raw segment this was derived from.
    pub segment: CareerSegment,
    /// Duration in whole months, always at least 1.
    pub duration: u32,
    /// Stable identifier derived from the label and positional index.
    pub id: String,
    /// Whether validation or duration calculation flagged this segment.
    pub has_warning: bool,
    /// The duration warning, if any.
    pub warning_message: Option<String>,
}
