//! Property tests for evaluation and visitation invariants.

mod common;

use common::*;
use constguard_analysis::enforcement::*;
use constguard_core::events::EventDispatcher;
use proptest::prelude::*;

const VARIANTS: [&str; 3] = ["dev", "prod", "staging"];
const BUILD_TYPES: [&str; 2] = ["debug", "release"];

fn variant() -> impl Strategy<Value = (&'static str, &'static str)> {
    (prop::sample::select(VARIANTS.to_vec()), prop::sample::select(BUILD_TYPES.to_vec()))
}

proptest! {
    /// A rule for another variant never fails, whatever the values.
    #[test]
    fn inapplicable_rules_never_fail(
        compiled in any::<bool>(),
        expected in any::<bool>(),
        rule_variant in variant(),
        active in variant(),
    ) {
        prop_assume!(rule_variant != active);
        let field = FieldDescriptor::describe(
            "a.BuildConfig",
            &debug_field(compiled, vec![enforce_bool(expected, rule_variant.0, rule_variant.1)]),
            &AnnotationDecoder::default(),
        );
        let outcome = RuleEvaluator::new(VariantContext::new(active.0, active.1))
            .evaluate(&field)
            .unwrap();
        prop_assert_eq!(outcome.verdict, FieldVerdict::NotApplicable);
    }

    /// An applicable rule passes exactly when the values agree.
    #[test]
    fn applicable_rule_passes_iff_equal(
        compiled in any::<bool>(),
        expected in any::<bool>(),
        active in variant(),
    ) {
        let field = FieldDescriptor::describe(
            "a.BuildConfig",
            &debug_field(compiled, vec![enforce_bool(expected, active.0, active.1)]),
            &AnnotationDecoder::default(),
        );
        let result = RuleEvaluator::new(VariantContext::new(active.0, active.1)).evaluate(&field);
        prop_assert_eq!(result.is_ok(), compiled == expected);
    }

    /// Each distinct class is checked once however often it is observed.
    #[test]
    fn checked_classes_equal_distinct_names(names in prop::collection::vec(0u8..12, 0..64)) {
        let classes: Vec<_> = names
            .iter()
            .map(|n| class(&format!("pkg.C{n}"), vec![]))
            .collect();
        let distinct: std::collections::HashSet<_> = names.iter().collect();

        let summary = run_check(
            &classes,
            VariantContext::new("prod", "release"),
            AnnotationDecoder::default(),
            &EventDispatcher::new(),
        )
        .unwrap();
        prop_assert_eq!(summary.classes_observed, names.len());
        prop_assert_eq!(summary.classes_checked, distinct.len());
    }
}
