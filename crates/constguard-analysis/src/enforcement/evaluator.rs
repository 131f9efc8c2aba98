//! Rule evaluator: the per-field decision core.

use constguard_core::errors::EnforcementError;
use constguard_core::types::SmallVec2;

use super::rule::{EnforcementRule, FieldDescriptor};

/// The (flavor, build type) pair a run enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantContext {
    pub flavor: String,
    pub build_type: String,
}

impl VariantContext {
    pub fn new(flavor: impl Into<String>, build_type: impl Into<String>) -> Self {
        Self {
            flavor: flavor.into(),
            build_type: build_type.into(),
        }
    }
}

/// How a field came out of evaluation, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVerdict {
    /// No enforcement annotations on the field.
    NoRules,
    /// Rules exist but the field has no compiled constant: vacuous pass.
    NonConstant,
    /// Every rule targets another variant or is incomplete.
    NotApplicable,
    /// At least one rule applied and every applicable rule matched.
    Passed,
}

#[derive(Debug, Clone)]
pub struct FieldOutcome<'a> {
    pub verdict: FieldVerdict,
    pub passed: SmallVec2<&'a EnforcementRule>,
    pub skipped: SmallVec2<&'a EnforcementRule>,
}

impl<'a> FieldOutcome<'a> {
    fn bare(verdict: FieldVerdict) -> Self {
        Self {
            verdict,
            passed: SmallVec2::new(),
            skipped: SmallVec2::new(),
        }
    }
}

pub struct RuleEvaluator {
    context: VariantContext,
}

impl RuleEvaluator {
    pub fn new(context: VariantContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &VariantContext {
        &self.context
    }

    /// Evaluate every rule on `field`, in declaration order.
    ///
    /// Each rule is type-checked before its variant is consulted, so an
    /// annotation whose kind can never match the field fails the run even
    /// when it targets another variant. Stops at the first failure.
    pub fn evaluate<'a>(
        &self,
        field: &'a FieldDescriptor,
    ) -> Result<FieldOutcome<'a>, EnforcementError> {
        if field.rules.is_empty() {
            return Ok(FieldOutcome::bare(FieldVerdict::NoRules));
        }
        let Some(actual) = field.actual.as_ref() else {
            return Ok(FieldOutcome::bare(FieldVerdict::NonConstant));
        };

        let mut outcome = FieldOutcome::bare(FieldVerdict::NotApplicable);
        for rule in &field.rules {
            if actual.kind() != rule.kind() {
                return Err(EnforcementError::TypeMismatch {
                    field: field.field_name.clone(),
                    class_name: field.class_name.clone(),
                    actual_kind: actual.kind(),
                    expected_kind: rule.kind(),
                });
            }

            // Incomplete rules never apply.
            let expected = match rule.expected() {
                Some(expected) if rule.applies_to(&self.context.flavor, &self.context.build_type) => {
                    expected
                }
                _ => {
                    outcome.skipped.push(rule);
                    continue;
                }
            };

            if actual.value_eq(expected) == Some(true) {
                outcome.passed.push(rule);
            } else {
                return Err(EnforcementError::ValueMismatch {
                    field: field.field_name.clone(),
                    class_name: field.class_name.clone(),
                    actual_value: actual.to_string(),
                    expected_value: expected.to_string(),
                    flavor: self.context.flavor.clone(),
                    build_type: self.context.build_type.clone(),
                });
            }
        }

        if !outcome.passed.is_empty() {
            outcome.verdict = FieldVerdict::Passed;
        }
        Ok(outcome)
    }
}
