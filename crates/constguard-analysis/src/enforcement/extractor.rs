//! Constant extractor: a field's compiled constant record as a typed value.

use constguard_core::types::TypedValue;

use crate::model::{DeclaredType, RawConstant};

/// Extract the compile-time constant of a field.
///
/// Returns `None` when there is no record, or when the field is an object
/// reference or array. Integer records back both `boolean` and `int`
/// fields, so the declared type decides: nonzero means `true` for a
/// boolean field, anything else is an `Int32`.
pub fn extract_constant(declared: &DeclaredType, raw: Option<&RawConstant>) -> Option<TypedValue> {
    let raw = raw?;
    if matches!(declared, DeclaredType::Other(_)) {
        return None;
    }

    let value = match raw {
        RawConstant::Int(v) if *declared == DeclaredType::Boolean => TypedValue::Bool(*v != 0),
        RawConstant::Int(v) => TypedValue::Int32(*v),
        RawConstant::Long(v) => TypedValue::Int64(*v),
        RawConstant::Float(v) => TypedValue::Float32(*v),
        RawConstant::Double(v) => TypedValue::Float64(*v),
        RawConstant::String(v) => TypedValue::Str(v.clone()),
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_field_reads_nonzero_as_true() {
        let v = extract_constant(&DeclaredType::Boolean, Some(&RawConstant::Int(2)));
        assert!(matches!(v, Some(TypedValue::Bool(true))));
        let v = extract_constant(&DeclaredType::Boolean, Some(&RawConstant::Int(0)));
        assert!(matches!(v, Some(TypedValue::Bool(false))));
    }

    #[test]
    fn char_field_stays_integer() {
        let v = extract_constant(&DeclaredType::Char, Some(&RawConstant::Int(65)));
        assert!(matches!(v, Some(TypedValue::Int32(65))));
    }
}
