use super::theme::Palette;
use careerbar_core::color::{check_color_contrast, rgb};
use careerbar_core::process::Severity;
use careerbar_core::render::{
    DateFormatOptions, format_date, format_duration, segment_width, total_duration,
};
use careerbar_core::validate::ValidationReport;
use careerbar_core::{Config, ProcessedSegment};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

/// Fallback glyphs for the bar when colors are disabled or a segment has no
/// usable color.
const BAR_GLYPHS: [char; 4] = ['█', '▓', '▒', '░'];

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
    pub full_month: bool,
    pub bar_width: usize,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(options: Option<RenderOptions>) -> Self {
        Self {
            skin: Palette::default_skin(),
            opts: match options {
                Some(options) => options,
                None => RenderOptions {
                    use_color: true,
                    full_month: false,
                    bar_width: 60,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// Prints a processing diagnostic to stderr, tagged with its severity.
    pub fn print_diagnostic(&self, severity: Severity, message: &str) {
        let tag = severity.as_ref();
        if self.opts.use_color {
            let tag = match severity {
                Severity::Warning => tag.with(Color::Yellow),
                Severity::Error => tag.with(Color::Red),
            };
            eprintln!("{tag}: {message}");
        } else {
            eprintln!("{tag}: {message}");
        }
    }

    /// Renders the proportional bar plus a legend line per segment.
    pub fn print_timeline(&self, config: &Config, segments: &[ProcessedSegment]) {
        if segments.is_empty() {
            self.print_info(&config.empty_message);
            return;
        }

        self.print_md(&format!("# {}\n", config.title));

        let total = total_duration(segments);
        let mut bar = String::new();
        for (index, segment) in segments.iter().enumerate() {
            let percent = segment_width(segment.duration, total, config.min_visual_width_percent);
            let columns = columns_for(percent, self.opts.bar_width);
            bar.push_str(&self.bar_cell(segment, index, columns));
        }
        println!("{bar}");
        println!();

        for segment in segments {
            self.print_legend_line(segment);
        }
        println!();
        println!("Total: {}", format_duration(total));
    }

    /// Renders the full validation report as markdown.
    pub fn print_report(&self, report: &ValidationReport) {
        let mut md = String::new();
        md.push_str("# Validation report\n\n");
        if report.is_valid {
            md.push_str("Segments are valid.\n");
        } else {
            md.push_str("Segments are **not valid**.\n");
        }

        if !report.errors.is_empty() {
            md.push_str("\n## Errors\n\n");
            for error in &report.errors {
                md.push_str(&format!("* {}\n", highlight_colors(error)));
            }
        }
        if !report.warnings.is_empty() {
            md.push_str("\n## Warnings\n\n");
            for warning in &report.warnings {
                md.push_str(&format!("* {}\n", highlight_colors(warning)));
            }
        }
        if !report.overlaps.is_empty() {
            md.push_str("\n## Overlaps\n\n");
            for overlap in &report.overlaps {
                md.push_str(&format!(
                    "* {} (segments {} and {})\n",
                    overlap.message, overlap.first, overlap.second
                ));
            }
        }
        if !report.gaps.is_empty() {
            md.push_str("\n## Gaps\n\n");
            for gap in &report.gaps {
                md.push_str(&format!(
                    "* {} month(s) after segment {}\n",
                    gap.gap_months, gap.after_index
                ));
            }
        }

        if self.opts.use_color {
            self.print_md(&md);
        } else {
            print!("{md}");
        }
    }

    fn bar_cell(&self, segment: &ProcessedSegment, index: usize, columns: usize) -> String {
        if self.opts.use_color {
            if let Some((r, g, b)) = rgb(&segment.segment.color) {
                return " "
                    .repeat(columns)
                    .on(Color::Rgb { r, g, b })
                    .to_string();
            }
        }
        BAR_GLYPHS[index % BAR_GLYPHS.len()].to_string().repeat(columns)
    }

    fn print_legend_line(&self, segment: &ProcessedSegment) {
        let date_options = DateFormatOptions {
            full_month: self.opts.full_month,
            formatter: None,
        };
        let start = format_date(&segment.segment.start, Some(date_options));
        let end = format_date(&segment.segment.end, Some(date_options));
        let duration = format_duration(segment.duration);
        let marker = if segment.has_warning { " (!)" } else { "" };

        let label = if segment.segment.label.is_empty() {
            segment.id.as_str()
        } else {
            segment.segment.label.as_str()
        };

        let chip = self.label_chip(label, &segment.segment.color);
        let role = if segment.segment.role.is_empty() {
            String::new()
        } else {
            format!(" — {}", segment.segment.role)
        };

        println!("{chip}{role}: {start} – {end} ({duration}){marker}");
    }

    /// The label drawn over its segment color, with light or dark text
    /// picked by the color's luminance.
    fn label_chip(&self, label: &str, color: &str) -> String {
        if self.opts.use_color {
            if let Some((r, g, b)) = rgb(color) {
                let fg = match check_color_contrast(color) {
                    Some(contrast) if contrast.needs_light_text => Color::White,
                    _ => Color::Black,
                };
                return format!(" {label} ")
                    .with(fg)
                    .on(Color::Rgb { r, g, b })
                    .to_string();
            }
        }
        label.to_string()
    }
}

/// Converts a width percentage into bar columns, keeping every segment at
/// least one column wide.
fn columns_for(percent: f64, bar_width: usize) -> usize {
    ((percent / 100.0) * bar_width as f64).round().max(1.0) as usize
}

/// Wraps `#RRGGBB` tokens in inline code so the skin highlights them.
fn highlight_colors(text: &str) -> String {
    let re = regex::Regex::new(r"#[0-9A-Fa-f]{6}").unwrap();
    re.replace_all(text, "`$0`").to_string()
}
