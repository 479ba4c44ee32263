//! Header classification for wide indicator tables.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{ModelError, Result};

/// A header that names a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearColumn {
    /// Header as it appears in the table.
    pub name: String,
    /// Parsed year.
    pub year: i32,
}

/// Classification of a wide table's headers.
///
/// Built once per table by [`ColumnLayout::classify`]. The first identifier
/// column names the entity (country) of each row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnLayout {
    identifier_columns: Vec<String>,
    year_columns: Vec<YearColumn>,
    ignored_columns: Vec<String>,
}

/// Parses a header as a year.
///
/// Only non-empty names made entirely of ASCII digits qualify, so `"1961"` and
/// `"0042"` are years while `"-5"`, `"+1961"`, `"1961.0"` and `"Y1961"` are not.
pub fn parse_year_column(name: &str) -> Option<i32> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

impl ColumnLayout {
    /// Classifies `headers` into identifier, year and ignored columns.
    ///
    /// # Errors
    ///
    /// - [`ModelError::NoIdentifiers`] when `identifier_columns` is empty
    /// - [`ModelError::MissingIdentifier`] when an identifier is not a header
    /// - [`ModelError::DuplicateYear`] when two headers parse to one year
    /// - [`ModelError::NoYearColumns`] when no remaining header is a year
    pub fn classify<H, I>(headers: &[H], identifier_columns: &[I]) -> Result<Self>
    where
        H: AsRef<str>,
        I: AsRef<str>,
    {
        if identifier_columns.is_empty() {
            return Err(ModelError::NoIdentifiers);
        }
        for identifier in identifier_columns {
            let identifier = identifier.as_ref();
            if !headers.iter().any(|h| h.as_ref() == identifier) {
                return Err(ModelError::MissingIdentifier {
                    column: identifier.to_string(),
                });
            }
        }

        let mut seen: BTreeMap<i32, &str> = BTreeMap::new();
        let mut year_columns = Vec::new();
        let mut ignored_columns = Vec::new();
        for header in headers {
            let header = header.as_ref();
            if identifier_columns.iter().any(|i| i.as_ref() == header) {
                continue;
            }
            let Some(year) = parse_year_column(header) else {
                ignored_columns.push(header.to_string());
                continue;
            };
            if let Some(first) = seen.insert(year, header) {
                return Err(ModelError::DuplicateYear {
                    year,
                    first: first.to_string(),
                    second: header.to_string(),
                });
            }
            year_columns.push(YearColumn {
                name: header.to_string(),
                year,
            });
        }

        if year_columns.is_empty() {
            return Err(ModelError::NoYearColumns {
                column_count: headers.len(),
            });
        }

        Ok(Self {
            identifier_columns: identifier_columns
                .iter()
                .map(|i| i.as_ref().to_string())
                .collect(),
            year_columns,
            ignored_columns,
        })
    }

    /// Column holding the entity name.
    pub fn entity_column(&self) -> &str {
        // classify() guarantees at least one identifier
        &self.identifier_columns[0]
    }

    /// Identifier columns in the order they were configured.
    pub fn identifier_columns(&self) -> &[String] {
        &self.identifier_columns
    }

    /// Year columns in header order.
    pub fn year_columns(&self) -> &[YearColumn] {
        &self.year_columns
    }

    /// Headers that are neither identifiers nor years.
    pub fn ignored_columns(&self) -> &[String] {
        &self.ignored_columns
    }

    /// Smallest and largest year present.
    pub fn year_span(&self) -> (i32, i32) {
        let mut min = i32::MAX;
        let mut max = i32::MIN;
        for column in &self.year_columns {
            min = min.min(column.year);
            max = max.max(column.year);
        }
        (min, max)
    }
}
