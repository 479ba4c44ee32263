//! Error types for layout classification and era bounds.

use thiserror::Error;

/// Broad category of a [`ModelError`].
///
/// A presentation layer can match on the kind to pick a user-facing message
/// without caring about the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The table does not have the expected columns.
    Schema,
    /// There is nothing to reshape.
    EmptyInput,
    /// Era bounds are malformed.
    Range,
}

/// Errors raised while classifying columns or validating year ranges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    // === Schema Errors ===
    /// An identifier column is not present in the table.
    #[error("identifier column '{column}' not found in table")]
    MissingIdentifier { column: String },

    /// No identifier columns were supplied, so there is no entity column.
    #[error("at least one identifier column is required")]
    NoIdentifiers,

    /// Two header names parse to the same year.
    #[error("year {year} is named by both '{first}' and '{second}'")]
    DuplicateYear {
        year: i32,
        first: String,
        second: String,
    },

    // === Empty Input ===
    /// No header name is a plain base-10 integer.
    #[error("no year columns found among {column_count} columns")]
    NoYearColumns { column_count: usize },

    // === Range Errors ===
    /// A range whose start lies after its end.
    #[error("invalid year range {min}..={max}: start is after end")]
    InvalidRange { min: i32, max: i32 },

    /// Era ranges share at least one year.
    #[error("year ranges {early} and {late} overlap")]
    OverlappingRanges { early: String, late: String },
}

impl ModelError {
    /// Returns the taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingIdentifier { .. } | Self::NoIdentifiers | Self::DuplicateYear { .. } => {
                ErrorKind::Schema
            }
            Self::NoYearColumns { .. } => ErrorKind::EmptyInput,
            Self::InvalidRange { .. } | Self::OverlappingRanges { .. } => ErrorKind::Range,
        }
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::MissingIdentifier {
            column: "ISO3".to_string(),
        };
        assert_eq!(err.to_string(), "identifier column 'ISO3' not found in table");

        let err = ModelError::InvalidRange {
            min: 2000,
            max: 1990,
        };
        assert_eq!(
            err.to_string(),
            "invalid year range 2000..=1990: start is after end"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(ModelError::NoIdentifiers.kind(), ErrorKind::Schema);
        assert_eq!(
            ModelError::NoYearColumns { column_count: 5 }.kind(),
            ErrorKind::EmptyInput
        );
        assert_eq!(
            ModelError::InvalidRange { min: 2, max: 1 }.kind(),
            ErrorKind::Range
        );
    }
}
