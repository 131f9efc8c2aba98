//! Annotation decoder: raw annotation records into enforcement rules.

use constguard_core::constants::{
    ANNOTATION_KEY_BUILD_TYPE, ANNOTATION_KEY_FLAVOR, ANNOTATION_KEY_VALUE,
    DEFAULT_ANNOTATION_PACKAGE,
};
use constguard_core::types::{TypedValue, ValueKind};

use super::rule::EnforcementRule;
use crate::model::{ElementValue, RawAnnotation};

/// The six enforcement annotation types, keyed by dex type descriptor.
#[derive(Debug, Clone)]
pub struct AnnotationCatalog {
    entries: [(String, ValueKind); 6],
}

impl AnnotationCatalog {
    /// Build the catalog for annotations living in `package`
    /// (dotted, e.g. `com.example.config`).
    pub fn for_package(package: &str) -> Self {
        let prefix = package.replace('.', "/");
        let entries = ValueKind::ALL.map(|kind| {
            (
                format!("L{prefix}/{};", simple_name(kind)),
                kind,
            )
        });
        Self { entries }
    }

    /// Kind enforced by the annotation with this descriptor, if it is one
    /// of the six.
    pub fn kind_of(&self, type_descriptor: &str) -> Option<ValueKind> {
        self.entries
            .iter()
            .find(|(descriptor, _)| descriptor == type_descriptor)
            .map(|(_, kind)| *kind)
    }

    /// Descriptor of the annotation that enforces `kind`.
    pub fn descriptor_for(&self, kind: ValueKind) -> &str {
        self.entries
            .iter()
            .find(|(_, k)| *k == kind)
            .map(|(descriptor, _)| descriptor.as_str())
            .unwrap_or_default()
    }
}

impl Default for AnnotationCatalog {
    fn default() -> Self {
        Self::for_package(DEFAULT_ANNOTATION_PACKAGE)
    }
}

fn simple_name(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Bool => "EnforceBooleanValue",
        ValueKind::Int32 => "EnforceIntValue",
        ValueKind::Int64 => "EnforceLongValue",
        ValueKind::Float32 => "EnforceFloatValue",
        ValueKind::Float64 => "EnforceDoubleValue",
        ValueKind::Str => "EnforceStringValue",
    }
}

/// Result of decoding one annotation record.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    /// Not one of the six enforcement annotations.
    NotEnforcement,
    /// An enforcement annotation whose `value` is missing or has the wrong
    /// literal type, decoded as an incomplete rule.
    MissingValue(EnforcementRule),
    Rule(EnforcementRule),
}

/// Pure transformation from raw annotation records to rules.
#[derive(Debug, Clone, Default)]
pub struct AnnotationDecoder {
    catalog: AnnotationCatalog,
}

impl AnnotationDecoder {
    pub fn new(catalog: AnnotationCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &AnnotationCatalog {
        &self.catalog
    }

    pub fn decode(&self, annotation: &RawAnnotation) -> DecodeOutcome {
        let Some(kind) = self.catalog.kind_of(&annotation.type_descriptor) else {
            return DecodeOutcome::NotEnforcement;
        };

        let mut flavor = None;
        let mut build_type = None;
        for element in &annotation.elements {
            if let ElementValue::String(ref s) = element.value {
                match element.name.as_str() {
                    ANNOTATION_KEY_FLAVOR => flavor = Some(s.clone()),
                    ANNOTATION_KEY_BUILD_TYPE => build_type = Some(s.clone()),
                    _ => {}
                }
            }
        }

        let expected = annotation
            .elements
            .iter()
            .filter(|e| e.name == ANNOTATION_KEY_VALUE)
            .find_map(|e| literal_of_kind(kind, &e.value));

        match expected {
            Some(expected) => {
                DecodeOutcome::Rule(EnforcementRule::new(expected, flavor, build_type))
            }
            None => {
                DecodeOutcome::MissingValue(EnforcementRule::incomplete(kind, flavor, build_type))
            }
        }
    }
}

/// The literal as a value of `kind`, or `None` when its literal type does
/// not match the annotation's kind.
fn literal_of_kind(kind: ValueKind, literal: &ElementValue) -> Option<TypedValue> {
    match (kind, literal) {
        (ValueKind::Bool, ElementValue::Boolean(v)) => Some(TypedValue::Bool(*v)),
        (ValueKind::Int32, ElementValue::Int(v)) => Some(TypedValue::Int32(*v)),
        (ValueKind::Int64, ElementValue::Long(v)) => Some(TypedValue::Int64(*v)),
        (ValueKind::Float32, ElementValue::Float(v)) => Some(TypedValue::Float32(*v)),
        (ValueKind::Float64, ElementValue::Double(v)) => Some(TypedValue::Float64(*v)),
        (ValueKind::Str, ElementValue::String(v)) => Some(TypedValue::Str(v.clone())),
        _ => None,
    }
}
