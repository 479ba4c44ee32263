//! Conversion of observations back into DataFrames.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use gts_model::Observation;
use polars::prelude::*;

use crate::error::{Result, TransformError};

/// Identifier column names across `observations`, entity column first.
fn identifier_names(observations: &[Observation], entity_column: &str) -> Vec<String> {
    let mut names = vec![entity_column.to_string()];
    for observation in observations {
        for (name, _) in &observation.identifiers {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }
    names
}

fn identifier_value(observation: &Observation, name: &str, entity_column: &str) -> String {
    if name == entity_column {
        return observation.entity.clone();
    }
    observation.identifier(name).unwrap_or_default().to_string()
}

/// Builds the long table: identifier columns, `Year`, then `value_column`.
///
/// Rows follow the order of `observations`.
pub fn observations_frame(
    observations: &[Observation],
    entity_column: &str,
    value_column: &str,
) -> Result<DataFrame> {
    let names = identifier_names(observations, entity_column);
    let mut columns: Vec<Column> = Vec::with_capacity(names.len() + 2);
    for name in &names {
        let values: Vec<String> = observations
            .iter()
            .map(|o| identifier_value(o, name, entity_column))
            .collect();
        columns.push(Series::new(name.as_str().into(), values).into());
    }
    let years: Vec<i32> = observations.iter().map(|o| o.year).collect();
    columns.push(Series::new("Year".into(), years).into());
    let values: Vec<Option<f64>> = observations.iter().map(|o| o.value).collect();
    columns.push(Series::new(value_column.into(), values).into());

    Ok(DataFrame::new(columns)?)
}

/// Pivots observations back to one row per entity and one column per year.
///
/// Entities keep their order of first appearance; year columns are sorted
/// ascending and named by the plain year. Identifier values come from the
/// first observation of each entity.
///
/// # Errors
///
/// [`TransformError::DuplicateObservation`] when an entity has two values for one year.
pub fn widen(observations: &[Observation], entity_column: &str) -> Result<DataFrame> {
    let names = identifier_names(observations, entity_column);
    let years: BTreeSet<i32> = observations.iter().map(|o| o.year).collect();

    let mut order: Vec<&Observation> = Vec::new();
    let mut cells: HashMap<&str, BTreeMap<i32, Option<f64>>> = HashMap::new();
    for observation in observations {
        let row = cells.entry(observation.entity.as_str()).or_insert_with(|| {
            order.push(observation);
            BTreeMap::new()
        });
        if row.insert(observation.year, observation.value).is_some() {
            return Err(TransformError::DuplicateObservation {
                entity: observation.entity.clone(),
                year: observation.year,
            });
        }
    }

    let mut columns: Vec<Column> = Vec::with_capacity(names.len() + years.len());
    for name in &names {
        let values: Vec<String> = order
            .iter()
            .map(|o| identifier_value(o, name, entity_column))
            .collect();
        columns.push(Series::new(name.as_str().into(), values).into());
    }
    for year in &years {
        let values: Vec<Option<f64>> = order
            .iter()
            .map(|o| {
                cells
                    .get(o.entity.as_str())
                    .and_then(|row| row.get(year).copied().flatten())
            })
            .collect();
        columns.push(Series::new(year.to_string().into(), values).into());
    }

    Ok(DataFrame::new(columns)?)
}
