//! Feedback command: respond to a rating.
//!
//! Bad ratings are answered, not treated as failures: the command prints
//! the explanation and exits successfully.

use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use textfilter_core::feedback::{self, Feedback};

/// Arguments for the `feedback` subcommand.
#[derive(Args, Debug)]
pub struct FeedbackArgs {
    /// Rating from 1 to 5.
    #[arg(allow_hyphen_values = true)]
    pub rating: String,
}

#[derive(Serialize)]
struct FeedbackOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Feedback>,
    message: String,
}

impl FeedbackOutput {
    fn from_input(input: &str) -> Self {
        let rating = feedback::parse_rating(input).ok();
        let category = rating.and_then(|r| feedback::classify(r).ok());
        Self {
            rating,
            category,
            message: feedback::respond_to_input(input),
        }
    }
}

/// Print the response to a rating.
#[instrument(name = "cmd_feedback", skip_all, fields(rating = %args.rating))]
pub fn cmd_feedback(args: FeedbackArgs, global_json: bool) -> anyhow::Result<()> {
    debug!("executing feedback command");

    let output = FeedbackOutput::from_input(&args.rating);
    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.message);
    }

    Ok(())
}
