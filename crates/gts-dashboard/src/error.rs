//! Error types for the dashboard data layer.

use std::path::PathBuf;

use gts_ingest::IngestError;
use gts_transform::TransformError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    // === Configuration ===
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("invalid config: {message}")]
    InvalidConfig { message: String },

    // === Logging ===
    #[error("invalid log level '{level}'")]
    InvalidLogLevel { level: String },

    #[error("failed to initialize logging: {message}")]
    Logging { message: String },

    // === Pipeline ===
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
