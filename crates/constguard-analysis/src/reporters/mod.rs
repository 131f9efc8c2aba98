//! Reporters: render the end of a run for humans or machines.

pub mod json;
pub mod text;

use constguard_core::config::ReportFormat;
use constguard_core::errors::RunError;

use crate::enforcement::CheckSummary;

pub use json::JsonReporter;
pub use text::TextReporter;

/// How a run ended. A failed run carries no summary: nothing after the
/// first violation was checked.
#[derive(Debug, Clone, Copy)]
pub enum CheckOutcome<'a> {
    Passed(&'a CheckSummary),
    Failed(&'a RunError),
}

impl<'a> From<&'a Result<CheckSummary, RunError>> for CheckOutcome<'a> {
    fn from(result: &'a Result<CheckSummary, RunError>) -> Self {
        match result {
            Ok(summary) => Self::Passed(summary),
            Err(error) => Self::Failed(error),
        }
    }
}

/// Trait for rendering a run outcome.
pub trait Reporter {
    fn name(&self) -> &'static str;
    fn render(&self, outcome: CheckOutcome<'_>) -> Result<String, String>;
}

/// Reporter for a configured format.
pub fn create_reporter(format: ReportFormat, show_passes: bool) -> Box<dyn Reporter> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new(show_passes)),
        ReportFormat::Json => Box::new(JsonReporter),
    }
}
