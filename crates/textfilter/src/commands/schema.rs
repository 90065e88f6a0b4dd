//! Schema command: JSON schema of the report emitted by `clean --format json`.

use clap::Args;
use tracing::instrument;

use textfilter_core::CleaningReport;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {}

/// Print the JSON schema for [`CleaningReport`].
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(CleaningReport);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
