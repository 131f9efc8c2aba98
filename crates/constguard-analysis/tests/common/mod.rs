//! Builders shared by the integration tests.
#![allow(dead_code)]

use constguard_analysis::enforcement::AnnotationCatalog;
use constguard_analysis::model::*;
use constguard_core::types::ValueKind;

pub const PACKAGE: &str = "com.github.promeg.configchecker";

pub fn descriptor(kind: ValueKind) -> String {
    AnnotationCatalog::for_package(PACKAGE)
        .descriptor_for(kind)
        .to_string()
}

pub fn enforce(kind: ValueKind, value: ElementValue, flavor: &str, build_type: &str) -> RawAnnotation {
    RawAnnotation {
        type_descriptor: descriptor(kind),
        elements: vec![
            AnnotationElement::new("flavor", ElementValue::String(flavor.into())),
            AnnotationElement::new("buildType", ElementValue::String(build_type.into())),
            AnnotationElement::new("value", value),
        ],
    }
}

pub fn enforce_bool(expected: bool, flavor: &str, build_type: &str) -> RawAnnotation {
    enforce(ValueKind::Bool, ElementValue::Boolean(expected), flavor, build_type)
}

pub fn field(
    name: &str,
    declared_type: DeclaredType,
    constant: Option<RawConstant>,
    annotations: Vec<RawAnnotation>,
) -> FieldModel {
    FieldModel {
        name: name.into(),
        declared_type,
        annotations,
        constant,
    }
}

/// `boolean DEBUG` with the given compiled value.
pub fn debug_field(compiled: bool, annotations: Vec<RawAnnotation>) -> FieldModel {
    field(
        "DEBUG",
        DeclaredType::Boolean,
        Some(RawConstant::Int(compiled as i32)),
        annotations,
    )
}

pub fn class(name: &str, fields: Vec<FieldModel>) -> ClassModel {
    ClassModel {
        name: name.into(),
        methods: vec![MethodModel {
            name: "<init>".into(),
            has_body: true,
        }],
        fields,
    }
}
