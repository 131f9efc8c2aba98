//! Class-model provider errors: the artifact could not be opened or read.

use std::path::PathBuf;

use super::error_code::{self, ConstguardErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Unable to open '{path}': file not found")]
    NotFound { path: PathBuf },

    #[error("Only file input is supported, '{path}' is a directory")]
    IsDirectory { path: PathBuf },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed class model in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid type descriptor '{descriptor}'")]
    InvalidDescriptor { descriptor: String },
}

impl ConstguardErrorCode for ProviderError {
    fn error_code(&self) -> &'static str {
        error_code::MALFORMED_INPUT
    }
}
