//! Temperature indicator ingestion.
//!
//! Loads a wide-format indicator CSV (one row per country, one column per
//! year) into a Polars DataFrame and classifies its headers once, so later
//! stages never have to guess which columns are years.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use gts_ingest::{IngestOptions, read_indicator_csv};
//!
//! let table = read_indicator_csv(Path::new("indicator.csv"), &IngestOptions::default())?;
//! println!("{} years for {} countries", table.layout.year_columns().len(), table.frame.height());
//! ```

mod csv;
mod error;
mod indicator;
mod options;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    MAX_CSV_FILE_SIZE, check_file_size_with_limit, read_csv_frame,
    read_csv_headers, validate_encoding,
};

// === Indicator Tables ===
pub use indicator::{IndicatorTable, prepare_indicator_frame, read_indicator_csv};
pub use options::{DEFAULT_IDENTIFIER_COLUMNS, IngestOptions, RowFilter};
