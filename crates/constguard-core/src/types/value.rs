//! Scalar value model for declared and compiled constants.
//!
//! Both sides of an enforcement check are expressed as a [`TypedValue`]:
//! the value an annotation declares, and the value the compiler baked into
//! the field. Only six scalar kinds exist and the set is closed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of scalar kinds an enforcement rule can talk about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Bool,
    Int32,
    Int64,
    Float32,
    Float64,
    Str,
}

impl ValueKind {
    pub const ALL: [ValueKind; 6] = [
        Self::Bool,
        Self::Int32,
        Self::Int64,
        Self::Float32,
        Self::Float64,
        Self::Str,
    ];

    /// Name of the kind as the source author wrote the field type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Int32 => "int",
            Self::Int64 => "long",
            Self::Float32 => "float",
            Self::Float64 => "double",
            Self::Str => "String",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar value tagged with its kind.
///
/// The derived `PartialEq` uses IEEE float equality; enforcement goes
/// through [`TypedValue::value_eq`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypedValue {
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Str(String),
}

impl TypedValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int32(_) => ValueKind::Int32,
            Self::Int64(_) => ValueKind::Int64,
            Self::Float32(_) => ValueKind::Float32,
            Self::Float64(_) => ValueKind::Float64,
            Self::Str(_) => ValueKind::Str,
        }
    }

    /// True when both values carry the same kind tag.
    pub fn same_kind(&self, other: &TypedValue) -> bool {
        self.kind() == other.kind()
    }

    /// Compares two values of the same kind.
    ///
    /// Returns `None` when the kinds differ: callers must check kinds first.
    /// Floats compare by bit pattern, so `0.0` and `-0.0` differ and a NaN
    /// equals only a NaN with identical bits.
    pub fn value_eq(&self, other: &TypedValue) -> Option<bool> {
        let equal = match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::Float32(a), Self::Float32(b)) => a.to_bits() == b.to_bits(),
            (Self::Float64(a), Self::Float64(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => a == b,
            _ => return None,
        };
        Some(equal)
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}L"),
            Self::Float32(v) => write!(f, "{v:?}f"),
            Self::Float64(v) => write!(f, "{v:?}"),
            Self::Str(v) => write!(f, "{v:?}"),
        }
    }
}
