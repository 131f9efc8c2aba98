//! Enforcement failures. Both variants abort the run.

use super::error_code::{self, ConstguardErrorCode};
use crate::types::ValueKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnforcementError {
    #[error(
        "Enforce value fail: field {class_name}.{field} has type {actual_kind} \
         but the annotation declares {expected_kind}"
    )]
    TypeMismatch {
        field: String,
        class_name: String,
        actual_kind: ValueKind,
        expected_kind: ValueKind,
    },

    #[error(
        "Enforce value fail: {class_name}.{field}={actual_value}, expected {expected_value} \
         for flavor '{flavor}' build type '{build_type}'"
    )]
    ValueMismatch {
        field: String,
        class_name: String,
        actual_value: String,
        expected_value: String,
        flavor: String,
        build_type: String,
    },
}

impl EnforcementError {
    /// Fully qualified `Class.field` the failure refers to.
    pub fn location(&self) -> String {
        match self {
            Self::TypeMismatch {
                field, class_name, ..
            }
            | Self::ValueMismatch {
                field, class_name, ..
            } => format!("{class_name}.{field}"),
        }
    }
}

impl ConstguardErrorCode for EnforcementError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => error_code::TYPE_MISMATCH,
            Self::ValueMismatch { .. } => error_code::VALUE_MISMATCH,
        }
    }
}
