//! Class-model providers: where compiled classes come from.
//!
//! Parsing dex, class or apk binaries is left to external dumpers; the
//! providers here read what those tools produce.

pub mod json;
pub mod memory;

use std::path::Path;
use std::sync::Arc;

use constguard_core::errors::ProviderError;

use crate::model::ClassModel;

pub use json::JsonModelProvider;
pub use memory::MemoryProvider;

/// Source of class observations for an artifact.
///
/// The returned sequence may contain the same class more than once; the
/// run driver dedupes by class name.
pub trait ClassModelProvider {
    fn load(&self, artifact: &Path) -> Result<Vec<Arc<ClassModel>>, ProviderError>;
}

impl<P: ClassModelProvider + ?Sized> ClassModelProvider for &P {
    fn load(&self, artifact: &Path) -> Result<Vec<Arc<ClassModel>>, ProviderError> {
        (**self).load(artifact)
    }
}

/// Expand classes into one observation per method body, at least one per
/// class, the way a body-driven traversal surfaces them.
pub(crate) fn per_body_observations(classes: Vec<ClassModel>) -> Vec<Arc<ClassModel>> {
    let mut observations = Vec::with_capacity(classes.len());
    for class in classes {
        let repeats = class.body_count().max(1);
        let class = Arc::new(class);
        observations.extend(std::iter::repeat_with(|| Arc::clone(&class)).take(repeats));
    }
    observations
}
