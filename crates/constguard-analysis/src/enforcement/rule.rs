//! Enforcement rules and the per-field view the evaluator works on.

use std::fmt;

use constguard_core::types::{SmallVec2, TypedValue, ValueKind};

use super::annotation::{AnnotationDecoder, DecodeOutcome};
use super::extractor::extract_constant;
use crate::model::{DeclaredType, FieldModel};

/// One decoded `Enforce*Value` annotation.
///
/// The kind comes from the annotation type, so it is known even when the
/// `value` parameter is missing. Such an incomplete rule still takes part
/// in the type check but never applies. An unset flavor or build type
/// never matches either.
#[derive(Debug, Clone, PartialEq)]
pub struct EnforcementRule {
    kind: ValueKind,
    expected: Option<TypedValue>,
    flavor: Option<String>,
    build_type: Option<String>,
}

impl EnforcementRule {
    pub fn new(expected: TypedValue, flavor: Option<String>, build_type: Option<String>) -> Self {
        Self {
            kind: expected.kind(),
            expected: Some(expected),
            flavor,
            build_type,
        }
    }

    /// A rule whose annotation carried no usable `value`.
    pub fn incomplete(kind: ValueKind, flavor: Option<String>, build_type: Option<String>) -> Self {
        Self {
            kind,
            expected: None,
            flavor,
            build_type,
        }
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn expected(&self) -> Option<&TypedValue> {
        self.expected.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_some()
    }

    pub fn flavor(&self) -> Option<&str> {
        self.flavor.as_deref()
    }

    pub fn build_type(&self) -> Option<&str> {
        self.build_type.as_deref()
    }

    /// True iff the rule is complete and both axes are set and equal to
    /// the active ones.
    pub fn applies_to(&self, flavor: &str, build_type: &str) -> bool {
        self.is_complete()
            && self.flavor.as_deref() == Some(flavor)
            && self.build_type.as_deref() == Some(build_type)
    }
}

impl fmt::Display for EnforcementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expected {
            Some(expected) => write!(f, "EnforceValueAnnotation{{value={expected}")?,
            None => write!(f, "EnforceValueAnnotation{{value=<missing {}>", self.kind)?,
        }
        write!(
            f,
            ", flavor='{}', buildType='{}'}}",
            self.flavor.as_deref().unwrap_or(""),
            self.build_type.as_deref().unwrap_or("")
        )
    }
}

/// A field with its decoded rules and extracted constant.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub class_name: String,
    pub field_name: String,
    pub declared_type: DeclaredType,
    pub rules: SmallVec2<EnforcementRule>,
    /// `None` when the field has no compile-time constant.
    pub actual: Option<TypedValue>,
    /// Enforcement annotations that carried no usable `value`; they are
    /// kept in `rules` as incomplete rules.
    pub malformed_rules: usize,
}

impl FieldDescriptor {
    /// Decode every annotation on `field` and extract its constant.
    pub fn describe(class_name: &str, field: &FieldModel, decoder: &AnnotationDecoder) -> Self {
        let mut rules = SmallVec2::new();
        let mut malformed_rules = 0;
        for annotation in &field.annotations {
            match decoder.decode(annotation) {
                DecodeOutcome::Rule(rule) => rules.push(rule),
                DecodeOutcome::MissingValue(rule) => {
                    tracing::warn!(
                        class = class_name,
                        field = %field.name,
                        annotation = %annotation.type_descriptor,
                        expected_literal = %rule.kind(),
                        "enforcement annotation has no usable value parameter; it can never apply"
                    );
                    malformed_rules += 1;
                    rules.push(rule);
                }
                DecodeOutcome::NotEnforcement => {}
            }
        }

        Self {
            class_name: class_name.to_string(),
            field_name: field.name.clone(),
            declared_type: field.declared_type.clone(),
            rules,
            actual: extract_constant(&field.declared_type, field.constant.as_ref()),
            malformed_rules,
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.class_name, self.field_name)
    }
}
