//! Options controlling how an indicator CSV is read.

use serde::{Deserialize, Serialize};

/// Identifier columns of the IMF climate indicator export.
pub const DEFAULT_IDENTIFIER_COLUMNS: [&str; 5] = ["Country", "ISO2", "ISO3", "Indicator", "Unit"];

/// Keep only rows whose `column` equals `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFilter {
    pub column: String,
    pub value: String,
}

/// Options for [`read_indicator_csv`](crate::read_indicator_csv).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Identifier columns; the first one names the entity.
    pub identifier_columns: Vec<String>,

    /// Prefix stripped from headers before classification.
    ///
    /// FAO exports name year columns `Y1961`, `Y1962`, ...
    pub year_prefix: Option<String>,

    /// Average year values of rows sharing an entity.
    pub collapse_duplicates: bool,

    /// Maximum accepted file size in bytes.
    pub max_file_size: u64,

    /// Row selection applied before anything else.
    pub row_filter: Option<RowFilter>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            identifier_columns: DEFAULT_IDENTIFIER_COLUMNS
                .iter()
                .map(ToString::to_string)
                .collect(),
            year_prefix: None,
            collapse_duplicates: false,
            max_file_size: crate::MAX_CSV_FILE_SIZE,
            row_filter: None,
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_identifier_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifier_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_year_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.year_prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn with_row_filter(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.row_filter = Some(RowFilter {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn with_collapse_duplicates(mut self, enable: bool) -> Self {
        self.collapse_duplicates = enable;
        self
    }
}
