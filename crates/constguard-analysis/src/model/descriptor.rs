//! Declared field types, parsed from dex/JVM descriptors or source names.

use std::fmt;
use std::str::FromStr;

use constguard_core::errors::ProviderError;
use serde::{Deserialize, Serialize};

/// Static type of a field as declared in the compiled class.
///
/// Byte, short and char fields are integer-backed: the compiler stores
/// their constants in an integer record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DeclaredType {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    String,
    /// Object references and arrays, kept as written.
    Other(String),
}

impl DeclaredType {
    /// True for the types whose constant record is a plain 32-bit integer.
    pub fn is_integer_backed(&self) -> bool {
        matches!(self, Self::Byte | Self::Short | Self::Char | Self::Int)
    }

    /// Parse a dex/JVM type descriptor such as `Z` or `Ljava/lang/String;`.
    pub fn from_descriptor(descriptor: &str) -> Result<Self, ProviderError> {
        let parsed = match descriptor {
            "Z" => Self::Boolean,
            "B" => Self::Byte,
            "S" => Self::Short,
            "C" => Self::Char,
            "I" => Self::Int,
            "J" => Self::Long,
            "F" => Self::Float,
            "D" => Self::Double,
            "Ljava/lang/String;" => Self::String,
            d if d.starts_with('[') && d.len() > 1 => Self::Other(d.to_string()),
            d if d.len() > 2 && d.starts_with('L') && d.ends_with(';') => {
                Self::Other(d.to_string())
            }
            _ => return Err(invalid(descriptor)),
        };
        Ok(parsed)
    }

    /// Parse a source-level type name such as `boolean` or `java.lang.String`.
    pub fn from_source_name(name: &str) -> Result<Self, ProviderError> {
        let parsed = match name {
            "boolean" => Self::Boolean,
            "byte" => Self::Byte,
            "short" => Self::Short,
            "char" => Self::Char,
            "int" => Self::Int,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            "String" | "java.lang.String" => Self::String,
            n if is_source_reference(n) => Self::Other(n.to_string()),
            _ => return Err(invalid(name)),
        };
        Ok(parsed)
    }

    fn as_source_name(&self) -> &str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Char => "char",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "java.lang.String",
            Self::Other(name) => name,
        }
    }
}

/// Single upper-case letters are primitive descriptors; anything longer
/// that starts with `L` or `[` is a reference descriptor. The rest is
/// treated as a source-level name.
impl FromStr for DeclaredType {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let looks_like_descriptor = (s.len() == 1 && s.chars().all(|c| c.is_ascii_uppercase()))
            || s.starts_with('[')
            || (s.starts_with('L') && s.ends_with(';'));
        if looks_like_descriptor {
            Self::from_descriptor(s)
        } else {
            Self::from_source_name(s)
        }
    }
}

impl TryFrom<String> for DeclaredType {
    type Error = ProviderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DeclaredType> for String {
    fn from(value: DeclaredType) -> Self {
        value.as_source_name().to_string()
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_source_name())
    }
}

fn is_source_reference(name: &str) -> bool {
    let base = name.trim_end_matches("[]");
    !base.is_empty()
        && base.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        })
}

fn invalid(descriptor: &str) -> ProviderError {
    ProviderError::InvalidDescriptor {
        descriptor: descriptor.to_string(),
    }
}
