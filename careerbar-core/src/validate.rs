//! Segment validation: required fields, date sanity, color format, and
//! cross-segment overlap/gap detection.
//!
//! Problems are split into two severities: `errors` (missing or unparseable
//! mandatory dates) flip `is_valid`, while `warnings` (missing cosmetic
//! fields, suspicious colors, swapped dates, overlaps, gaps) never do.

use chrono::NaiveDate;

use crate::color::is_hex_color;
use crate::duration::{MIN_DURATION_MONTHS, duration_months, months_between};
use crate::parse_date::parse_date;
use crate::segment::CareerSegment;

/// Validation outcome for a single segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentValidation {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// A pair of segments whose date ranges intersect.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlap {
    /// Index of the earlier segment in the original list.
    pub first: usize,
    /// Index of the later segment in the original list (always > `first`).
    pub second: usize,
    pub message: String,
}

/// Idle time between two consecutive segments, ordered by start date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gap {
    /// Original-list index of the segment the gap follows.
    pub after_index: usize,
    /// Number of idle whole months between the two segments.
    pub gap_months: u32,
}

/// Aggregate validation outcome for a whole segment list.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// False iff any segment carries errors.
    pub is_valid: bool,
    /// All warnings, including overlap and gap notices.
    pub warnings: Vec<String>,
    /// All errors, flattened from the per-segment results.
    pub errors: Vec<String>,
    /// Per-segment results, in input order.
    pub segment_reports: Vec<SegmentValidation>,
    pub overlaps: Vec<Overlap>,
    pub gaps: Vec<Gap>,
}

/// Validates a single segment. `index` is only used in messages.
pub fn validate_segment(segment: &CareerSegment, index: usize) -> SegmentValidation {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    if segment.start.is_empty() {
        errors.push(format!("Segment {index}: Missing required field \"start\""));
    }
    if segment.end.is_empty() {
        errors.push(format!("Segment {index}: Missing required field \"end\""));
    }
    if segment.label.is_empty() {
        warnings.push(format!("Segment {index}: Missing \"label\" field"));
    }
    if segment.role.is_empty() {
        warnings.push(format!("Segment {index}: Missing \"role\" field"));
    }
    if segment.color.is_empty() {
        warnings.push(format!(
            "Segment {index}: Missing \"color\" field, will use default"
        ));
    }

    let start_parsed = parse_date(&segment.start);
    let end_parsed = parse_date(&segment.end);

    if !start_parsed.is_valid {
        if let Some(error) = &start_parsed.error {
            errors.push(format!("Segment {index} ({}): {error}", segment.label));
        }
    }
    // The parser already accepts the sentinel in any case, so the exact-match
    // guard here is redundant; kept to mirror the required-field policy.
    if !end_parsed.is_valid && segment.end != "Present" {
        if let Some(error) = &end_parsed.error {
            errors.push(format!("Segment {index} ({}): {error}", segment.label));
        }
    }

    let duration = duration_months(&segment.start, &segment.end);
    if let Some(warning) = &duration.warning {
        warnings.push(format!("Segment {index} ({}): {warning}", segment.label));
    }
    if duration.months < MIN_DURATION_MONTHS {
        warnings.push(format!(
            "Segment {index} ({}): Duration is less than 1 month",
            segment.label
        ));
    }

    if !segment.color.is_empty() && !is_hex_color(&segment.color) {
        warnings.push(format!(
            "Segment {index} ({}): Color \"{}\" may not be a valid hex color",
            segment.label, segment.color
        ));
    }

    SegmentValidation {
        is_valid: errors.is_empty(),
        warnings,
        errors,
    }
}

/// Detects overlapping segments with a pairwise comparison.
///
/// Half-open interval semantics: a segment ending the same month another
/// starts does not count as an overlap. Each pair is reported once, with
/// `first < second`.
pub fn detect_overlaps(segments: &[CareerSegment]) -> Vec<Overlap> {
    let mut overlaps = Vec::new();

    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            let a = &segments[i];
            let b = &segments[j];

            let a_start = parse_date(&a.start).date;
            let a_end = parse_date(&a.end).date;
            let b_start = parse_date(&b.start).date;
            let b_end = parse_date(&b.end).date;

            if a_start < b_end && a_end > b_start {
                overlaps.push(Overlap {
                    first: i,
                    second: j,
                    message: format!(
                        "Segments \"{}\" and \"{}\" have overlapping dates",
                        a.label, b.label
                    ),
                });
            }
        }
    }

    overlaps
}

/// Detects idle time between consecutive segments.
///
/// Segments are ordered by parsed start date (stable for ties). Each segment
/// is tagged with its original index before sorting, so `after_index` refers
/// to the input list even for value-equal duplicate entries. Adjacency
/// across a single calendar-month boundary is not a gap; anything wider is
/// reported minus that one month.
pub fn detect_gaps(segments: &[CareerSegment]) -> Vec<Gap> {
    let mut order: Vec<(usize, NaiveDate)> = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| (index, parse_date(&segment.start).date))
        .collect();
    order.sort_by_key(|&(_, start)| start);

    let mut gaps = Vec::new();
    for pair in order.windows(2) {
        let (current_index, _) = pair[0];
        let (_, next_start) = pair[1];

        let current_end = parse_date(&segments[current_index].end).date;
        let distance = months_between(current_end, next_start);

        if distance > 1 {
            gaps.push(Gap {
                after_index: current_index,
                gap_months: (distance - 1) as u32,
            });
        }
    }

    gaps
}

/// Validates a whole segment list: per-segment checks plus overlap and gap
/// detection, with everything flattened into one report.
///
/// An empty list is valid, but noted with a warning.
pub fn validate_segments(segments: &[CareerSegment]) -> ValidationReport {
    let mut report = ValidationReport {
        is_valid: true,
        ..Default::default()
    };

    if segments.is_empty() {
        report.warnings.push("Segments list is empty".to_string());
        return report;
    }

    for (index, segment) in segments.iter().enumerate() {
        let segment_report = validate_segment(segment, index);
        if !segment_report.is_valid {
            report.is_valid = false;
        }
        report.warnings.extend(segment_report.warnings.clone());
        report.errors.extend(segment_report.errors.clone());
        report.segment_reports.push(segment_report);
    }

    report.overlaps = detect_overlaps(segments);
    report.gaps = detect_gaps(segments);

    for overlap in &report.overlaps {
        report.warnings.push(overlap.message.clone());
    }
    for gap in &report.gaps {
        report.warnings.push(format!(
            "Gap of {} month(s) detected after segment {}",
            gap.gap_months, gap.after_index
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: &str, end: &str, label: &str) -> CareerSegment {
        CareerSegment {
            start: start.to_string(),
            end: end.to_string(),
            label: label.to_string(),
            role: "Engineer".to_string(),
            color: "#3b82f6".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn well_formed_segment_is_valid() {
        let result = validate_segment(&seg("2023-01", "2023-06", "Acme"), 0);
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn missing_dates_are_errors() {
        let result = validate_segment(&CareerSegment::default(), 2);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("\"start\"")));
        assert!(result.errors.iter().any(|e| e.contains("\"end\"")));
    }

    #[test]
    fn missing_cosmetic_fields_are_warnings() {
        let segment = CareerSegment {
            start: "2023-01".to_string(),
            end: "2023-06".to_string(),
            ..Default::default()
        };
        let result = validate_segment(&segment, 0);
        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.contains("\"label\"")));
        assert!(result.warnings.iter().any(|w| w.contains("\"role\"")));
        assert!(result.warnings.iter().any(|w| w.contains("\"color\"")));
    }

    #[test]
    fn unparseable_start_is_an_error() {
        let result = validate_segment(&seg("junk", "2023-06", "Acme"), 0);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("YYYY-MM")));
    }

    #[test]
    fn present_end_is_not_an_error() {
        let result = validate_segment(&seg("2023-01", "Present", "Acme"), 0);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn swapped_dates_warn_but_stay_valid() {
        let result = validate_segment(&seg("2023-06", "2023-01", "Acme"), 0);
        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.contains("swapped")));
    }

    #[test]
    fn suspicious_color_warns() {
        let mut segment = seg("2023-01", "2023-06", "Acme");
        segment.color = "blue".to_string();
        let result = validate_segment(&segment, 0);
        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.contains("hex color")));
    }

    #[test]
    fn overlapping_ranges_are_detected_once() {
        let segments = vec![
            seg("2023-01", "2023-06", "A"),
            seg("2023-03", "2023-08", "B"),
        ];
        let overlaps = detect_overlaps(&segments);
        assert_eq!(overlaps.len(), 1);
        assert_eq!((overlaps[0].first, overlaps[0].second), (0, 1));
        assert!(overlaps[0].message.contains("\"A\""));
        assert!(overlaps[0].message.contains("\"B\""));
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        let segments = vec![
            seg("2023-01", "2023-06", "A"),
            seg("2023-06", "2023-12", "B"),
        ];
        assert!(detect_overlaps(&segments).is_empty());
    }

    #[test]
    fn adjacent_months_are_not_a_gap() {
        let segments = vec![
            seg("2022-06", "2023-01", "A"),
            seg("2023-02", "2023-12", "B"),
        ];
        assert!(detect_gaps(&segments).is_empty());
    }

    #[test]
    fn wide_gap_is_reported_minus_one_month() {
        // Jan to Jun is a five-month distance; one month of adjacency is
        // free, leaving four idle months.
        let segments = vec![
            seg("2022-06", "2023-01", "A"),
            seg("2023-06", "2023-12", "B"),
        ];
        let gaps = detect_gaps(&segments);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].after_index, 0);
        assert_eq!(gaps[0].gap_months, 4);
    }

    #[test]
    fn gap_index_refers_to_the_original_order() {
        // The later-starting segment comes first in the input.
        let segments = vec![
            seg("2023-06", "2023-12", "B"),
            seg("2022-06", "2023-01", "A"),
        ];
        let gaps = detect_gaps(&segments);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].after_index, 1);
    }

    #[test]
    fn duplicate_segments_keep_distinct_indices() {
        // Value-equal duplicates must not confuse the index tagging.
        let segments = vec![
            seg("2022-01", "2022-06", "Same"),
            seg("2022-01", "2022-06", "Same"),
            seg("2023-01", "2023-06", "Later"),
        ];
        let gaps = detect_gaps(&segments);
        assert_eq!(gaps.len(), 1);
        // The second duplicate is the one adjacent to "Later" after the
        // stable sort.
        assert_eq!(gaps[0].after_index, 1);
        assert_eq!(gaps[0].gap_months, 6);
    }

    #[test]
    fn empty_list_is_valid_with_notice() {
        let report = validate_segments(&[]);
        assert!(report.is_valid);
        assert!(report.warnings.iter().any(|w| w.contains("empty")));
        assert!(report.errors.is_empty());
        assert!(report.segment_reports.is_empty());
    }

    #[test]
    fn report_aggregates_everything() {
        let segments = vec![
            seg("2023-01", "2023-06", "A"),
            seg("2023-03", "2023-08", "B"),
            CareerSegment::default(),
        ];
        let report = validate_segments(&segments);
        assert!(!report.is_valid);
        assert_eq!(report.segment_reports.len(), 3);
        assert_eq!(report.overlaps.len(), 1);
        assert!(report.warnings.iter().any(|w| w.contains("overlapping")));
        assert!(!report.errors.is_empty());
    }

    #[test]
    fn errors_never_come_from_warnings() {
        let segments = vec![
            seg("2023-06", "2023-01", "Swapped"),
            seg("2024-01", "Present", "Ongoing"),
        ];
        let report = validate_segments(&segments);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(!report.warnings.is_empty());
    }
}
