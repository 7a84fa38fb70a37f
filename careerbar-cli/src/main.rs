mod render;

use anyhow::Result;
use careerbar_core::Timeline;
use careerbar_core::process::process_segments_with;
use clap::Parser;
use render::{ColorMode, RenderOptions, Renderer};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

/// careerbar — render a career timeline in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Segments TOML file (defaults to the configured segments file)
    file: Option<PathBuf>,
    /// Prints the configured segments file path
    #[arg(long, short, exclusive = true)]
    path: bool,
    /// Prints the validation report instead of the timeline
    #[arg(long)]
    validate: bool,
    /// Emits validation warnings while rendering the timeline
    #[arg(long, short)]
    warnings: bool,
    /// Shows full month names (e.g. `June 2023` instead of `Jun 2023`)
    #[arg(long)]
    full_month: bool,
    /// Width of the rendered bar, in columns
    #[arg(long, default_value_t = 60)]
    width: usize,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("careerbar: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let timeline = Timeline::new()?;

    let use_color = match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    };
    let renderer = Renderer::new(Some(RenderOptions {
        use_color,
        full_month: cli.full_month || timeline.config.full_month,
        bar_width: cli.width,
    }));

    if cli.path {
        renderer.print_info(&format!("{}", timeline.config.segments_file.display()));
        return Ok(());
    }

    let segments = timeline.load_segments(cli.file.as_deref())?;

    if cli.validate {
        let report = timeline.validate(&segments);
        renderer.print_report(&report);
        return Ok(());
    }

    let processed = if cli.warnings || timeline.config.show_validation_warnings {
        process_segments_with(&segments, &mut |severity, message| {
            renderer.print_diagnostic(severity, message);
        })
    } else {
        timeline.process(&segments)
    };

    renderer.print_timeline(&timeline.config, &processed);
    Ok(())
}
