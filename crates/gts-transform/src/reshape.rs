//! Wide-to-long reshaping of indicator tables.

use std::collections::BTreeSet;

use gts_common::{any_to_f64, any_to_string};
use gts_model::{ColumnLayout, Observation};
use polars::prelude::DataFrame;
use tracing::debug;

use crate::error::{Result, TransformError};

/// Melts the year columns of `frame` into tidy observations.
///
/// Headers are classified with [`ColumnLayout::classify`]: identifier columns
/// are carried onto every observation, headers made only of digits become
/// years, everything else is skipped. The first identifier names the entity.
///
/// Observations come out year column by year column, rows in frame order
/// within each year.
///
/// # Errors
///
/// - [`TransformError::Model`] when an identifier is missing or no header is a year
/// - [`TransformError::DuplicateEntity`] when an entity occupies two rows
pub fn reshape<S: AsRef<str>>(frame: &DataFrame, identifier_columns: &[S]) -> Result<Vec<Observation>> {
    let names: Vec<&str> = frame
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    let layout = ColumnLayout::classify(&names, identifier_columns)?;
    reshape_with_layout(frame, &layout)
}

/// Melts `frame` using a layout classified earlier, e.g. at load time.
pub fn reshape_with_layout(frame: &DataFrame, layout: &ColumnLayout) -> Result<Vec<Observation>> {
    let height = frame.height();
    let mut identifiers: Vec<Vec<(String, String)>> =
        vec![Vec::with_capacity(layout.identifier_columns().len()); height];
    for name in layout.identifier_columns() {
        let column = frame.column(name)?;
        for (row, fields) in identifiers.iter_mut().enumerate() {
            fields.push((name.clone(), any_to_string(column.get(row)?)));
        }
    }

    let mut seen = BTreeSet::new();
    for fields in &identifiers {
        let entity = fields[0].1.as_str();
        if !seen.insert(entity) {
            return Err(TransformError::DuplicateEntity {
                entity: entity.to_string(),
            });
        }
    }

    let mut observations = Vec::with_capacity(height * layout.year_columns().len());
    let mut missing = 0usize;
    for year_column in layout.year_columns() {
        let column = frame.column(&year_column.name)?;
        for (row, fields) in identifiers.iter().enumerate() {
            let value = any_to_f64(column.get(row)?);
            if value.is_none() {
                missing += 1;
            }
            observations.push(Observation {
                entity: fields[0].1.clone(),
                year: year_column.year,
                value,
                identifiers: fields.clone(),
            });
        }
    }

    debug!(
        entities = height,
        years = layout.year_columns().len(),
        observations = observations.len(),
        missing,
        "reshaped wide table"
    );
    Ok(observations)
}
