//! Tone command: keyword tone detection and greeting.

use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use textfilter_core::tone::{self, Tone};

/// Arguments for the `tone` subcommand.
#[derive(Args, Debug)]
pub struct ToneArgs {
    /// Message to classify.
    pub message: String,

    /// Pick the greeting for a sender who has not supplied text yet.
    #[arg(long)]
    pub no_text: bool,
}

#[derive(Serialize)]
struct ToneOutput {
    tone: Tone,
    greeting: &'static str,
}

/// Classify a message and print its tone and greeting.
#[instrument(name = "cmd_tone", skip_all)]
pub fn cmd_tone(args: ToneArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(no_text = args.no_text, "executing tone command");

    let tone = tone::classify(&args.message);
    let output = ToneOutput {
        tone,
        greeting: tone.greeting(!args.no_text),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{}: {}",
            "Tone".if_supports_color(Stream::Stdout, |t| t.dimmed()),
            output.tone.if_supports_color(Stream::Stdout, |t| t.cyan())
        );
        println!("{}", output.greeting);
    }

    Ok(())
}
