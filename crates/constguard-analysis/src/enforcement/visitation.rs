//! Class visitation controller.
//!
//! A provider may surface the same class once per method body it walks.
//! Field checks must run once per class, so each run owns a set of the
//! names it has already checked.

use constguard_core::constants::VISITED_CLASSES_CAPACITY;
use constguard_core::types::FxHashSet;

#[derive(Debug, Default)]
pub struct VisitedClasses {
    seen: FxHashSet<String>,
}

impl VisitedClasses {
    pub fn new() -> Self {
        Self {
            seen: FxHashSet::with_capacity_and_hasher(
                VISITED_CLASSES_CAPACITY,
                Default::default(),
            ),
        }
    }

    /// Returns true, and records the name, the first time `class_name` is
    /// seen in this run. Every later call for the same name returns false.
    pub fn mark_if_unseen(&mut self, class_name: &str) -> bool {
        if self.seen.contains(class_name) {
            return false;
        }
        self.seen.insert(class_name.to_string())
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.seen.contains(class_name)
    }

    /// Number of distinct classes seen so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
