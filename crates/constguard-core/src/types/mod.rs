//! Value model and collection aliases shared across constguard.

pub mod collections;
pub mod value;

pub use collections::{FxHashMap, FxHashSet, SmallVec2};
pub use value::{TypedValue, ValueKind};
