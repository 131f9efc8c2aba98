//! Classes, fields and the raw metadata records attached to them.

use serde::{Deserialize, Serialize};

use super::DeclaredType;

/// A literal carried by an annotation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementValue {
    String(String),
    Boolean(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

/// One named annotation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationElement {
    pub name: String,
    pub value: ElementValue,
}

impl AnnotationElement {
    pub fn new(name: impl Into<String>, value: ElementValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// An annotation record as it appears on a field: its type descriptor
/// (`Lcom/example/Foo;`) and its parameters in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAnnotation {
    #[serde(rename = "type")]
    pub type_descriptor: String,
    #[serde(default)]
    pub elements: Vec<AnnotationElement>,
}

/// The compiled constant-value record of a field.
///
/// Booleans have no record of their own: they are stored as `Int`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawConstant {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldModel {
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: DeclaredType,
    #[serde(default)]
    pub annotations: Vec<RawAnnotation>,
    #[serde(default)]
    pub constant: Option<RawConstant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodModel {
    pub name: String,
    /// Abstract and native methods have no body.
    #[serde(default = "default_has_body")]
    pub has_body: bool,
}

fn default_has_body() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassModel {
    /// Fully qualified name; unique within a run.
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodModel>,
    #[serde(default)]
    pub fields: Vec<FieldModel>,
}

impl ClassModel {
    /// Number of method bodies a body-driven traversal would visit.
    pub fn body_count(&self) -> usize {
        self.methods.iter().filter(|m| m.has_body).count()
    }
}
