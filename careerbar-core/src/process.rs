use strum_macros::{AsRefStr, EnumIter};

use crate::duration::duration_months;
use crate::segment::{CareerSegment, ProcessedSegment};
use crate::validate::validate_segments;

/// Severity of a diagnostic emitted while processing segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Generates a stable identifier for a segment.
///
/// The label is lower-cased, runs of non-alphanumeric characters collapse to
/// a single `-`, and the slug is capped at 20 characters. The positional
/// index prefix keeps ids unique even for duplicate labels.
///
/// # Examples
///
/// ```
/// # use careerbar_core::CareerSegment;
/// # use careerbar_core::process::segment_id;
/// let segment = CareerSegment {
///     label: "Tech Company A".into(),
///     ..Default::default()
/// };
/// assert_eq!(segment_id(&segment, 0), "segment-0-tech-company-a");
/// ```
pub fn segment_id(segment: &CareerSegment, index: usize) -> String {
    let mut slug = String::new();
    let mut previous_dash = false;
    for ch in segment.label.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
            previous_dash = false;
        } else if !previous_dash {
            slug.push('-');
            previous_dash = true;
        }
    }
    slug.truncate(20);
    format!("segment-{index}-{slug}")
}

/// Enriches raw segments with computed durations, ids, and warning flags,
/// streaming every validation diagnostic through `sink`.
///
/// The sink is purely observational: it never alters the returned data. Pass
/// a closure that logs, collects, or ignores, depending on the caller.
pub fn process_segments_with<F>(segments: &[CareerSegment], sink: &mut F) -> Vec<ProcessedSegment>
where
    F: FnMut(Severity, &str),
{
    let validation = validate_segments(segments);

    for warning in &validation.warnings {
        sink(Severity::Warning, warning);
    }
    for error in &validation.errors {
        sink(Severity::Error, error);
    }

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let duration = duration_months(&segment.start, &segment.end);
            let segment_valid = validation
                .segment_reports
                .get(index)
                .map(|r| r.is_valid)
                .unwrap_or(false);

            ProcessedSegment {
                segment: segment.clone(),
                duration: duration.months,
                id: segment_id(segment, index),
                has_warning: duration.warning.is_some() || !segment_valid,
                warning_message: duration.warning,
            }
        })
        .collect()
}

/// [`process_segments_with`] without a diagnostic sink.
pub fn process_segments(segments: &[CareerSegment]) -> Vec<ProcessedSegment> {
    process_segments_with(segments, &mut |_, _| {})
}
