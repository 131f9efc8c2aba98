//! Enforcement engine: decode rules, extract constants, evaluate, drive a run.

pub mod annotation;
pub mod driver;
pub mod evaluator;
pub mod extractor;
pub mod rule;
pub mod summary;
pub mod visitation;

pub use annotation::{AnnotationCatalog, AnnotationDecoder, DecodeOutcome};
pub use driver::{run_check, CheckRun, CheckRunner};
pub use evaluator::{FieldOutcome, FieldVerdict, RuleEvaluator, VariantContext};
pub use extractor::extract_constant;
pub use rule::{EnforcementRule, FieldDescriptor};
pub use summary::{CheckSummary, PassRecord};
pub use visitation::VisitedClasses;
