//! Clean command: validate, clean, and report.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use textfilter_core::config::Config;
use textfilter_core::{CleaningReport, ReportFormat, TextFilter, Tone, render, tone};

use super::read_input;

/// Arguments for the `clean` subcommand.
#[derive(Args, Debug, Default)]
pub struct CleanArgs {
    /// File to clean (`-` for stdin). Reads stdin when omitted.
    #[arg(conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// Text to clean, given inline.
    #[arg(short, long)]
    pub text: Option<String>,

    /// Message whose tone picks the greeting printed before the report.
    #[arg(short, long)]
    pub message: Option<String>,

    /// Report format.
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Warn when special-character density exceeds the threshold.
    #[arg(long)]
    pub warn_on_high_density: bool,

    /// Maximum input length in characters.
    #[arg(long)]
    pub max_length: Option<usize>,
}

#[derive(Serialize)]
struct CleanOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    tone: Option<Tone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    greeting: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<&'a str>,
    report: &'a CleaningReport,
}

/// Clean text and print the report.
#[instrument(name = "cmd_clean", skip_all, fields(file = ?args.file))]
pub fn cmd_clean(args: CleanArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(format = ?args.format, max_length = ?args.max_length, "executing clean command");

    let text = match args.text {
        Some(text) => text,
        None => read_input(args.file.as_deref(), config.input_limit())?,
    };

    let mut validator = config.validator();
    if args.warn_on_high_density {
        validator.warn_on_high_density = true;
    }
    if let Some(max) = args.max_length {
        validator.max_length = max;
    }

    let processed = match TextFilter::new(validator).process(Some(&text)) {
        Ok(processed) => processed,
        Err(err) => bail!("{err}"),
    };

    let tone = args.message.as_deref().map(tone::classify);
    let greeting = tone.map(|t| t.greeting(!text.is_empty()));

    if global_json {
        let output = CleanOutput {
            tone,
            greeting,
            warning: processed.warning.as_deref(),
            report: &processed.report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(greeting) = greeting {
        println!("{greeting}\n");
    }
    if let Some(ref warning) = processed.warning {
        eprintln!(
            "{}",
            warning.if_supports_color(Stream::Stderr, |t| t.yellow())
        );
    }

    let format = args.format.or(config.format).unwrap_or_default();
    let rendered = render(&processed.report, format).context("failed to render report")?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}
