//! JSON reporter: structured output for pipelines.

use serde_json::json;

use constguard_core::errors::ConstguardErrorCode;

use super::{CheckOutcome, Reporter};

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, outcome: CheckOutcome<'_>) -> Result<String, String> {
        let output = match outcome {
            CheckOutcome::Passed(summary) => json!({
                "ok": true,
                "summary": summary,
            }),
            CheckOutcome::Failed(error) => json!({
                "ok": false,
                "error": {
                    "code": error.error_code(),
                    "message": error.to_string(),
                    "exit_code": error.exit_code(),
                },
            }),
        };

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
