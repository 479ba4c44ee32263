//! Error types for indicator transformations.

use gts_model::{ErrorKind, ModelError};
use thiserror::Error;

/// Errors that can occur while reshaping or aggregating observations.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Layout or range validation failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A wide table has two rows for one entity.
    #[error("entity '{entity}' appears on more than one row")]
    DuplicateEntity { entity: String },

    /// Two observations share an entity and year.
    #[error("entity '{entity}' has more than one observation for {year}")]
    DuplicateObservation { entity: String, year: i32 },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl TransformError {
    /// Taxonomy bucket for layout and range failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Model(err) => Some(err.kind()),
            Self::DuplicateEntity { .. } => Some(ErrorKind::Schema),
            Self::DuplicateObservation { .. } | Self::DataFrame { .. } => None,
        }
    }
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
