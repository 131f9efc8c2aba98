//! Plain-text console report.

use std::fmt::Write;

use constguard_core::errors::{ConstguardErrorCode, RunError};

use super::{CheckOutcome, Reporter};

pub struct TextReporter {
    show_passes: bool,
}

impl TextReporter {
    pub fn new(show_passes: bool) -> Self {
        Self { show_passes }
    }
}

impl Reporter for TextReporter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn render(&self, outcome: CheckOutcome<'_>) -> Result<String, String> {
        let mut out = String::new();
        match outcome {
            CheckOutcome::Passed(summary) => {
                if self.show_passes {
                    for pass in &summary.passes {
                        writeln!(out, "Enforce value pass >>>>>>> {pass}").map_err(|e| e.to_string())?;
                    }
                }
                let artifacts: Vec<String> = summary
                    .artifacts
                    .iter()
                    .map(|a| a.display().to_string())
                    .collect();
                writeln!(
                    out,
                    "Config check passed!  ================ [{}]",
                    artifacts.join(", ")
                )
                .map_err(|e| e.to_string())?;
                writeln!(
                    out,
                    "flavor '{}', build type '{}': {} of {} fields passed in {} classes, {} rules for other variants, {} fields without constant",
                    summary.flavor,
                    summary.build_type,
                    summary.fields_passed,
                    summary.fields_checked,
                    summary.classes_checked,
                    summary.rules_skipped,
                    summary.fields_without_constant,
                )
                .map_err(|e| e.to_string())?;
                if summary.malformed_rules > 0 {
                    writeln!(
                        out,
                        "warning: {} enforcement annotations had no usable value and never apply",
                        summary.malformed_rules
                    )
                    .map_err(|e| e.to_string())?;
                }
                writeln!(out, "Done! Cost {}s", summary.elapsed_ms / 1000).map_err(|e| e.to_string())?;
            }
            CheckOutcome::Failed(RunError::Enforcement(error)) => {
                writeln!(out, "Enforce value fail <<<<<< [{}] {error}", error.error_code())
                    .map_err(|e| e.to_string())?;
            }
            CheckOutcome::Failed(error) => {
                writeln!(out, "Failed: {}", error.tagged()).map_err(|e| e.to_string())?;
            }
        }
        Ok(out)
    }
}
