//! Core library for textfilter.
//!
//! Validates raw text, cleans it, and reports what changed. Tone detection
//! and feedback classification sit beside the pipeline and never affect it.
//!
//! # Modules
//!
//! - [`policy`] - Allowed and special character sets
//! - [`validate`] - Input constraints and special-character density
//! - [`clean`] - The cleaning transform
//! - [`report`] - Original vs. cleaned comparison
//! - [`render`] - Markdown, HTML and JSON output
//! - [`pipeline`] - Validation, cleaning and reporting in one call
//! - [`tone`] - Keyword tone detection and greetings
//! - [`feedback`] - Rating responses
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textfilter_core::TextFilter;
//!
//! let processed = TextFilter::default()
//!     .process(Some("Hey!!! weird @#$ text!!"))
//!     .unwrap();
//! assert_eq!(processed.report.cleaned_text, "Hey! weird text!");
//! ```
#![deny(unsafe_code)]

pub mod clean;
pub mod config;
pub mod error;
pub mod feedback;
pub mod pipeline;
pub mod policy;
pub mod render;
pub mod report;
pub mod tone;
pub mod validate;

pub use clean::clean;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, FeedbackError, RenderError, ValidationError};
pub use pipeline::{Processed, TextFilter};
pub use policy::CharacterPolicy;
pub use render::{ReportFormat, render};
pub use report::{CleaningReport, build_report};
pub use tone::Tone;
pub use validate::{ValidationResult, Validator, compute_density};

/// Default byte limit for reading input from files or stdin (1 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;
