//! Check configuration: the active variant and annotation namespace.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ANNOTATION_PACKAGE;

/// Configuration for the enforcement check itself.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CheckConfig {
    /// Product flavor being checked. Required before a run starts.
    pub flavor: Option<String>,
    /// Build type being checked. Required before a run starts.
    pub build_type: Option<String>,
    /// Java package holding the `Enforce*Value` annotations.
    pub annotation_package: Option<String>,
}

impl CheckConfig {
    /// Returns the effective annotation package, defaulting to
    /// `com.github.promeg.configchecker`.
    pub fn effective_annotation_package(&self) -> &str {
        self.annotation_package
            .as_deref()
            .unwrap_or(DEFAULT_ANNOTATION_PACKAGE)
    }
}
