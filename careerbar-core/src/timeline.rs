//! The central `Timeline` struct, tying configuration, segment loading, and
//! the pure processing pipeline together.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::process::process_segments;
use crate::segment::{CareerSegment, ProcessedSegment};
use crate::validate::{ValidationReport, validate_segments};

/// The central struct for timeline operations.
///
/// An instance of `Timeline` holds the configuration and provides methods
/// for loading, validating, and processing segment lists.
#[derive(Debug)]
pub struct Timeline {
    pub config: Config,
}

/// On-disk shape of a segments file: an array of `[[segments]]` tables.
#[derive(Debug, Deserialize)]
struct SegmentsFile {
    #[serde(default)]
    segments: Vec<CareerSegment>,
}

impl Timeline {
    /// Creates a new `Timeline`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    /// Creates a new `Timeline` with a specific `Config`.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Loads segments from a TOML file.
    ///
    /// An explicit `path` wins over the configured segments file. Unreadable
    /// or malformed files fail fast with a contextual error; everything
    /// softer than that (bad dates, missing labels) is left for
    /// [`validate`](Self::validate) to report.
    pub fn load_segments(&self, path: Option<&Path>) -> Result<Vec<CareerSegment>> {
        let path = path.unwrap_or(&self.config.segments_file);
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let file: SegmentsFile =
            toml::from_str(&s).with_context(|| format!("parsing {}", path.display()))?;
        Ok(file.segments)
    }

    /// Validates a segment list without transforming it.
    pub fn validate(&self, segments: &[CareerSegment]) -> ValidationReport {
        validate_segments(segments)
    }

    /// Processes a segment list into display-ready segments.
    pub fn process(&self, segments: &[CareerSegment]) -> Vec<ProcessedSegment> {
        process_segments(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::mk_config;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_segments_file(dir: &Path, contents: &str) -> std::path::PathBuf {
        let path = dir.join("segments.toml");
        let mut f = fs::File::create(&path).expect("create segments file");
        f.write_all(contents.as_bytes()).expect("write segments");
        path
    }

    #[test]
    fn loads_segments_from_toml() {
        let tmp = tempdir().unwrap();
        let path = write_segments_file(
            tmp.path(),
            r##"
                [[segments]]
                start = "2022-01"
                end = "2023-06"
                label = "Tech Company A"
                role = "Junior Developer"
                color = "#3b82f6"

                [[segments]]
                start = "2023-07"
                end = "Present"
                label = "Current Company"
                role = "Software Engineer"
                color = "#f59e0b"
                description = "Platform work"
            "##,
        );
        let timeline = Timeline::with_config(mk_config(path));

        let segments = timeline.load_segments(None).expect("segments load");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].label, "Tech Company A");
        assert_eq!(segments[1].end, "Present");
        assert_eq!(segments[1].description.as_deref(), Some("Platform work"));
    }

    #[test]
    fn omitted_fields_default_to_empty() {
        let tmp = tempdir().unwrap();
        let path = write_segments_file(
            tmp.path(),
            r#"
                [[segments]]
                start = "2022-01"
                end = "2022-06"
            "#,
        );
        let timeline = Timeline::with_config(mk_config(path));

        let segments = timeline.load_segments(None).expect("segments load");
        assert_eq!(segments[0].label, "");
        assert_eq!(segments[0].color, "");
    }

    #[test]
    fn explicit_path_wins_over_config() {
        let tmp = tempdir().unwrap();
        let configured = write_segments_file(tmp.path(), "segments = []");
        let explicit = tmp.path().join("other.toml");
        fs::write(
            &explicit,
            "[[segments]]\nstart = \"2022-01\"\nend = \"2022-06\"\n",
        )
        .unwrap();
        let timeline = Timeline::with_config(mk_config(configured));

        let segments = timeline
            .load_segments(Some(&explicit))
            .expect("segments load");
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn malformed_file_fails_with_context() {
        let tmp = tempdir().unwrap();
        let path = write_segments_file(tmp.path(), "[[segments]\nstart = ");
        let timeline = Timeline::with_config(mk_config(path.clone()));

        let err = timeline.load_segments(None).unwrap_err();
        assert!(format!("{err:#}").contains(&path.display().to_string()));
    }

    #[test]
    fn missing_file_fails_with_context() {
        let tmp = tempdir().unwrap();
        let timeline = Timeline::with_config(mk_config(tmp.path().join("nope.toml")));
        assert!(timeline.load_segments(None).is_err());
    }

    #[test]
    fn loaded_segments_flow_through_the_pipeline() {
        let tmp = tempdir().unwrap();
        let path = write_segments_file(
            tmp.path(),
            r##"
                [[segments]]
                start = "2022-01"
                end = "2023-06"
                label = "Tech Company A"
                role = "Junior Developer"
                color = "#3b82f6"
            "##,
        );
        let timeline = Timeline::with_config(mk_config(path));

        let segments = timeline.load_segments(None).expect("segments load");
        let report = timeline.validate(&segments);
        assert!(report.is_valid);

        let processed = timeline.process(&segments);
        assert_eq!(processed.len(), 1);
        assert_eq!(processed[0].duration, 17);
        assert_eq!(processed[0].id, "segment-0-tech-company-a");
    }
}
