//! Output formats for cleaning reports.
//!
//! HTML is produced from the markdown rendering with pulldown-cmark, so the
//! two always carry the same sections.

use pulldown_cmark::{Options, Parser, html};
use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::report::CleaningReport;

/// How a report is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ReportFormat {
    /// Markdown document (default).
    #[default]
    Markdown,
    /// HTML fragment converted from the markdown document.
    Html,
    /// Pretty-printed JSON of the report fields.
    Json,
}

impl ReportFormat {
    /// Returns the format name as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `report` in the requested format.
#[tracing::instrument(skip(report))]
pub fn render(report: &CleaningReport, format: ReportFormat) -> Result<String, RenderError> {
    match format {
        ReportFormat::Markdown => Ok(report.to_markdown()),
        ReportFormat::Html => Ok(markdown_to_html(&report.to_markdown())),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Convert a markdown document to an HTML fragment.
///
/// Inline HTML in the source (such as the `<font>` highlights in the fixes
/// section) passes through unchanged.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
