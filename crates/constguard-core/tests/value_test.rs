//! Tests for the scalar value model.

use proptest::prelude::*;

use constguard_core::types::{TypedValue, ValueKind};

fn sample(kind: ValueKind) -> TypedValue {
    match kind {
        ValueKind::Bool => TypedValue::Bool(false),
        ValueKind::Int32 => TypedValue::Int32(0),
        ValueKind::Int64 => TypedValue::Int64(0),
        ValueKind::Float32 => TypedValue::Float32(0.0),
        ValueKind::Float64 => TypedValue::Float64(0.0),
        ValueKind::Str => TypedValue::Str(String::new()),
    }
}

#[test]
fn test_differing_kinds_never_compare() {
    for a in ValueKind::ALL {
        for b in ValueKind::ALL {
            let result = sample(a).value_eq(&sample(b));
            if a == b {
                assert_eq!(result, Some(true));
            } else {
                assert_eq!(result, None, "{a} vs {b} must not be compared");
            }
        }
    }
}

#[test]
fn test_int_and_long_with_same_number_are_not_equal() {
    let int = TypedValue::Int32(1);
    let long = TypedValue::Int64(1);
    assert!(!int.same_kind(&long));
    assert_eq!(int.value_eq(&long), None);
}

#[test]
fn test_float_comparison_is_exact() {
    assert_eq!(
        TypedValue::Float64(0.1 + 0.2).value_eq(&TypedValue::Float64(0.3)),
        Some(false)
    );
    assert_eq!(
        TypedValue::Float32(0.0).value_eq(&TypedValue::Float32(-0.0)),
        Some(false)
    );
    assert_eq!(
        TypedValue::Float64(f64::NAN).value_eq(&TypedValue::Float64(f64::NAN)),
        Some(true)
    );
}

#[test]
fn test_kind_names() {
    let names: Vec<String> = ValueKind::ALL.iter().map(|k| k.to_string()).collect();
    assert_eq!(names, ["boolean", "int", "long", "float", "double", "String"]);
}

#[test]
fn test_typed_value_serializes_with_kind_tag() {
    let json = serde_json::to_value(TypedValue::Bool(true)).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "bool", "value": true }));
}

proptest! {
    #[test]
    fn prop_int_equality_matches_native(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(TypedValue::Int32(a).value_eq(&TypedValue::Int32(b)), Some(a == b));
    }

    #[test]
    fn prop_string_equality_matches_native(a in "\\PC{0,16}", b in "\\PC{0,16}") {
        let eq = a == b;
        prop_assert_eq!(TypedValue::Str(a).value_eq(&TypedValue::Str(b)), Some(eq));
    }

    #[test]
    fn prop_double_equal_to_itself_by_bits(bits in any::<u64>()) {
        let v = f64::from_bits(bits);
        prop_assert_eq!(TypedValue::Float64(v).value_eq(&TypedValue::Float64(v)), Some(true));
    }
}
