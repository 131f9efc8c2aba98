//! In-memory provider, for embedding and tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use constguard_core::errors::ProviderError;
use constguard_core::types::FxHashMap;

use super::{per_body_observations, ClassModelProvider};
use crate::model::ClassModel;

/// Serves class models registered under artifact paths.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    artifacts: FxHashMap<PathBuf, Vec<Arc<ClassModel>>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register classes for `artifact`, one observation per method body.
    pub fn insert(&mut self, artifact: impl Into<PathBuf>, classes: Vec<ClassModel>) {
        self.artifacts
            .insert(artifact.into(), per_body_observations(classes));
    }

    /// Register an exact observation sequence for `artifact`.
    pub fn insert_observations(
        &mut self,
        artifact: impl Into<PathBuf>,
        observations: Vec<Arc<ClassModel>>,
    ) {
        self.artifacts.insert(artifact.into(), observations);
    }
}

impl ClassModelProvider for MemoryProvider {
    fn load(&self, artifact: &Path) -> Result<Vec<Arc<ClassModel>>, ProviderError> {
        self.artifacts
            .get(artifact)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound {
                path: artifact.to_path_buf(),
            })
    }
}
