//! Error types shared by the transaction source, output sink and configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FpError {
    #[error("transaction source {path} is unavailable: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `path` is `None` when writing to a caller-supplied writer.
    #[error("output sink {} is unavailable: {source}", sink_name(.path))]
    SinkUnavailable {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("invalid config value for {field}: {message}")]
    InvalidConfig { field: String, message: String },

    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },
}

fn sink_name(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "writer".to_owned(),
    }
}

impl FpError {
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        FpError::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FpError>;
