//! Run summary.

use std::fmt;
use std::path::PathBuf;

use constguard_core::types::TypedValue;
use serde::Serialize;

/// One field whose applicable rule matched.
#[derive(Debug, Clone, Serialize)]
pub struct PassRecord {
    pub class_name: String,
    pub field: String,
    pub value: TypedValue,
    pub flavor: String,
    pub build_type: String,
}

impl fmt::Display for PassRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}={}  (flavor '{}', build type '{}')",
            self.class_name, self.field, self.value, self.flavor, self.build_type
        )
    }
}

/// Counts and pass records of a successful run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckSummary {
    pub flavor: String,
    pub build_type: String,
    pub artifacts: Vec<PathBuf>,
    /// Class observations handed over by the provider, repeats included.
    pub classes_observed: usize,
    /// Distinct classes whose fields were checked.
    pub classes_checked: usize,
    /// Fields with a constant and at least one rule for the active variant.
    pub fields_checked: usize,
    pub fields_passed: usize,
    pub rules_evaluated: usize,
    pub rules_skipped: usize,
    /// Fields carrying rules but no compile-time constant.
    pub fields_without_constant: usize,
    pub malformed_rules: usize,
    pub passes: Vec<PassRecord>,
    pub elapsed_ms: u64,
}
