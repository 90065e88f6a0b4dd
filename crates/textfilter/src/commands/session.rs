//! Session command: the guided, prompt-driven flow.
//!
//! Asks for an intent message and the text, prints the greeting and report,
//! then asks for a rating. Validation failures print their message and end
//! the session without error.

use std::io::{BufRead, Write};

use clap::Args;
use tracing::{debug, instrument};

use textfilter_core::config::Config;
use textfilter_core::{TextFilter, feedback, tone};

use super::strip_line_ending;

const MESSAGE_PROMPT: &str = "What can I do for you? ";
const TEXT_PROMPT: &str = "Enter the text to clean: ";
const RATING_PROMPT: &str = "Enter your rating (1-5): ";

/// Arguments for the `session` subcommand.
#[derive(Args, Debug, Default)]
pub struct SessionArgs {
    /// Intent message; prompted for when omitted.
    #[arg(short, long)]
    pub message: Option<String>,

    /// Skip the rating prompt.
    #[arg(long)]
    pub no_feedback: bool,
}

/// Run a session on stdin/stdout.
#[instrument(name = "cmd_session", skip_all)]
pub fn cmd_session(args: SessionArgs, config: &Config) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&args, config, &mut stdin.lock(), &mut stdout.lock())
}

/// Drive a session over arbitrary input and output streams.
pub fn run_session<R: BufRead, W: Write>(
    args: &SessionArgs,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let message = match args.message {
        Some(ref m) => m.clone(),
        None => prompt(input, out, MESSAGE_PROMPT)?.unwrap_or_default(),
    };
    let text = prompt(input, out, TEXT_PROMPT)?;
    debug!(has_text = text.is_some(), "session input read");

    let tone = tone::classify(&message);
    let has_text = text.as_deref().is_some_and(|t| !t.is_empty());
    let greeting = tone.greeting(has_text);

    let processed = match TextFilter::from_config(config).process(text.as_deref()) {
        Ok(processed) => processed,
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(());
        }
    };

    writeln!(out, "{greeting}")?;
    if let Some(ref warning) = processed.warning {
        writeln!(out, "{warning}")?;
    }
    writeln!(out, "\n{}", processed.report.to_markdown())?;

    if args.no_feedback {
        return Ok(());
    }
    if let Some(rating) = prompt(input, out, RATING_PROMPT)? {
        writeln!(out, "{}", feedback::respond_to_input(&rating))?;
    }
    Ok(())
}

/// Print `label` and read one line. `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> anyhow::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    strip_line_ending(&mut line);
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &SessionArgs, stdin: &str) -> String {
        let mut input = stdin.as_bytes();
        let mut out = Vec::new();
        run_session(args, &Config::default(), &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_session() {
        let out = run(
            &SessionArgs::default(),
            "Please help me clean this text!\nHey!!! weird @#$ text!!\n5\n",
        );
        assert!(out.contains("I'll start the cleaning process now."));
        assert!(out.contains("## Cleaned Text\n```\nHey! weird text!\n```"));
        assert!(out.contains(RATING_PROMPT));
        assert!(out.trim_end().ends_with(
            "Thank you! I'm glad you found it helpful. Let me know if you need further improvements!"
        ));
    }

    #[test]
    fn message_flag_skips_prompt() {
        let args = SessionArgs {
            message: Some("hey".to_string()),
            no_feedback: true,
        };
        let out = run(&args, "tidy  this\n");
        assert!(!out.contains(MESSAGE_PROMPT));
        assert!(out.contains("Hey there!"));
        assert!(!out.contains(RATING_PROMPT));
    }

    #[test]
    fn empty_text_ends_session() {
        let out = run(&SessionArgs::default(), "hello\n\n");
        assert!(out.contains("ERROR: Please provide text"));
        assert!(!out.contains("Text Cleaning Report"));
    }

    #[test]
    fn bad_rating_is_answered() {
        let out = run(&SessionArgs::default(), "hi\nsome text\nten\n");
        assert!(out.contains("Invalid input. Please enter a number between 1 and 5."));
    }

    #[test]
    fn missing_rating_is_fine() {
        let out = run(&SessionArgs::default(), "hi\nsome text\n");
        assert!(out.contains("Text Cleaning Report"));
        assert!(!out.contains("Invalid"));
    }
}
