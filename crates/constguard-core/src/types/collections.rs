//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec sized for per-field rule lists (usually one or two variants).
pub type SmallVec2<T> = SmallVec<[T; 2]>;
