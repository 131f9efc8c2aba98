//! JSON class dumps.
//!
//! Accepts either a top-level array of classes or an object with a
//! `classes` array:
//!
//! ```json
//! { "classes": [ {
//!     "name": "com.example.BuildConfig",
//!     "methods": [ { "name": "<init>" } ],
//!     "fields": [ {
//!         "name": "DEBUG",
//!         "type": "Z",
//!         "constant": { "int": 0 },
//!         "annotations": [ {
//!             "type": "Lcom/github/promeg/configchecker/EnforceBooleanValue;",
//!             "elements": [
//!                 { "name": "flavor", "value": { "string": "prod" } },
//!                 { "name": "buildType", "value": { "string": "release" } },
//!                 { "name": "value", "value": { "boolean": false } }
//!             ]
//!         } ]
//!     } ]
//! } ] }
//! ```

use std::path::Path;
use std::sync::Arc;

use constguard_core::errors::ProviderError;
use serde_json::Value;

use super::{per_body_observations, ClassModelProvider};
use crate::model::ClassModel;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonModelProvider;

impl JsonModelProvider {
    pub fn new() -> Self {
        Self
    }

    /// Parse a dump already in memory. `path` is only used in errors.
    pub fn parse(&self, content: &str, path: &Path) -> Result<Vec<ClassModel>, ProviderError> {
        let parse_error = |message: String| ProviderError::Parse {
            path: path.to_path_buf(),
            message,
        };

        let document: Value =
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        let classes = match document {
            Value::Array(items) => Value::Array(items),
            Value::Object(mut map) => map
                .remove("classes")
                .ok_or_else(|| parse_error("missing top-level \"classes\" array".to_string()))?,
            _ => {
                return Err(parse_error(
                    "expected an array of classes or an object with \"classes\"".to_string(),
                ))
            }
        };

        serde_json::from_value(classes).map_err(|e| parse_error(e.to_string()))
    }
}

impl ClassModelProvider for JsonModelProvider {
    fn load(&self, artifact: &Path) -> Result<Vec<Arc<ClassModel>>, ProviderError> {
        if !artifact.exists() {
            return Err(ProviderError::NotFound {
                path: artifact.to_path_buf(),
            });
        }
        if artifact.is_dir() {
            return Err(ProviderError::IsDirectory {
                path: artifact.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(artifact).map_err(|source| ProviderError::Io {
            path: artifact.to_path_buf(),
            source,
        })?;
        let classes = self.parse(&content, artifact)?;
        Ok(per_body_observations(classes))
    }
}
