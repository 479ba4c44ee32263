//! Change between two selected years.

use std::collections::{BTreeMap, HashSet};

use gts_model::Observation;

use crate::error::{Result, TransformError};
use crate::types::YearPairChange;

/// Per-entity change from `from_year` to `to_year`, sorted by entity.
///
/// Entities without a value in both years are dropped.
///
/// # Errors
///
/// [`TransformError::DuplicateObservation`] when an entity has two
/// observations for either year.
pub fn year_pair_change(
    observations: &[Observation],
    from_year: i32,
    to_year: i32,
) -> Result<Vec<YearPairChange>> {
    let mut seen: HashSet<(&str, i32)> = HashSet::new();
    let mut pairs: BTreeMap<&str, (Option<f64>, Option<f64>)> = BTreeMap::new();
    for observation in observations {
        if observation.year != from_year && observation.year != to_year {
            continue;
        }
        if !seen.insert((observation.entity.as_str(), observation.year)) {
            return Err(TransformError::DuplicateObservation {
                entity: observation.entity.clone(),
                year: observation.year,
            });
        }
        let slot = pairs.entry(observation.entity.as_str()).or_default();
        if observation.year == from_year {
            slot.0 = observation.numeric_value();
        }
        if observation.year == to_year {
            slot.1 = observation.numeric_value();
        }
    }

    Ok(pairs
        .into_iter()
        .filter_map(|(entity, (from, to))| {
            let (from_value, to_value) = (from?, to?);
            Some(YearPairChange {
                entity: entity.to_string(),
                from_year,
                to_year,
                from_value,
                to_value,
                change: to_value - from_value,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_pair_change() {
        let observations = vec![
            Observation::new("Peru", 2023, Some(1.0)),
            Observation::new("Peru", 2024, Some(1.5)),
            Observation::new("Chile", 2024, Some(0.5)),
            Observation::new("Chile", 2023, Some(1.0)),
            Observation::new("Bolivia", 2023, Some(1.0)),
            Observation::new("Bolivia", 2024, None),
            Observation::new("Chile", 2000, Some(9.0)),
        ];
        let changes = year_pair_change(&observations, 2023, 2024).unwrap();
        let rows: Vec<(&str, f64)> = changes
            .iter()
            .map(|c| (c.entity.as_str(), c.change))
            .collect();
        assert_eq!(rows, vec![("Chile", -0.5), ("Peru", 0.5)]);
    }

    #[test]
    fn test_duplicate_year_is_rejected() {
        let observations = vec![
            Observation::new("Peru", 2023, Some(1.0)),
            Observation::new("Peru", 2023, Some(2.0)),
        ];
        let err = year_pair_change(&observations, 2023, 2024).unwrap_err();
        assert!(matches!(err, TransformError::DuplicateObservation { year: 2023, .. }));
    }
}
