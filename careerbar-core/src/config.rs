use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

use crate::render::MIN_VISUAL_WIDTH_PERCENT;

#[derive(Debug, Clone)]
pub struct Config {
    /// Segments file rendered when the CLI is given no path argument.
    pub segments_file: PathBuf,
    /// Title printed above the timeline.
    pub title: String,
    /// Message shown when the segments list is empty.
    pub empty_message: String,
    /// Minimum visual width percentage for tiny segments.
    pub min_visual_width_percent: f64,
    /// Show full month names (`June 2023`) instead of abbreviated.
    pub full_month: bool,
    /// Emit validation warnings while rendering the timeline.
    pub show_validation_warnings: bool,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    segments_file: Option<PathBuf>,
    title: Option<String>,
    empty_message: Option<String>,
    min_visual_width_percent: Option<f64>,
    full_month: Option<bool>,
    show_validation_warnings: Option<bool>,
}

impl FileConfig {
    fn empty() -> Self {
        Self {
            segments_file: None,
            title: None,
            empty_message: None,
            min_visual_width_percent: None,
            full_month: None,
            show_validation_warnings: None,
        }
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native)
    /// and apply defaults for anything the file leaves out.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|_| FileConfig::empty());
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        Self {
            segments_file: file_config
                .segments_file
                .unwrap_or_else(Self::default_segments_file),
            title: file_config
                .title
                .unwrap_or_else(|| "Career Timeline".to_string()),
            empty_message: file_config
                .empty_message
                .unwrap_or_else(|| "No career data available".to_string()),
            min_visual_width_percent: file_config
                .min_visual_width_percent
                .unwrap_or(MIN_VISUAL_WIDTH_PERCENT),
            full_month: file_config.full_month.unwrap_or(false),
            show_validation_warnings: file_config.show_validation_warnings.unwrap_or(false),
        }
    }

    /// Default segments file: `{data_dir}/careerbar/segments.toml`
    /// - macOS:   `~/Library/Application Support/careerbar/segments.toml`
    /// - Linux:   `$XDG_DATA_HOME/careerbar/...` or `~/.local/share/careerbar/...`
    /// - Windows: `%APPDATA%\careerbar\segments.toml`
    fn default_segments_file() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("careerbar");
            p.push("segments.toml");
            p
        } else {
            PathBuf::from("./careerbar/segments.toml")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("careerbar")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("careerbar").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::empty())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
