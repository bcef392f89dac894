use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading analysis options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read options file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse options file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid option {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, OptionsError>;
