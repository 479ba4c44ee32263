//! Era variability comparison.
//!
//! Splits observations into an early and a late era, computes each entity's
//! sample standard deviation in both, and ranks entities by how much their
//! variability changed.

use std::collections::BTreeMap;

use gts_model::{EraStat, ModelError, Observation, VariabilityDelta, YearRange};
use tracing::debug;

use crate::error::Result;

/// Sample standard deviation (divisor `n - 1`).
///
/// Returns `None` for fewer than two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (n - 1.0)).sqrt())
}

fn validate_eras(early: YearRange, late: YearRange) -> Result<()> {
    early.validate()?;
    late.validate()?;
    if early.overlaps(&late) {
        return Err(ModelError::OverlappingRanges {
            early: early.to_string(),
            late: late.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Per-entity standard deviation in each era.
///
/// Every entity with at least one observation inside either era gets a row,
/// sorted by entity. An era with fewer than two non-missing values is `None`.
///
/// # Errors
///
/// [`ModelError::InvalidRange`] for a range with `min > max`,
/// [`ModelError::OverlappingRanges`] when the eras share a year.
pub fn era_stats(
    observations: &[Observation],
    early: YearRange,
    late: YearRange,
) -> Result<Vec<EraStat>> {
    validate_eras(early, late)?;

    let mut groups: BTreeMap<&str, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for observation in observations {
        let in_early = early.contains(observation.year);
        if !in_early && !late.contains(observation.year) {
            continue;
        }
        let (early_values, late_values) = groups.entry(observation.entity.as_str()).or_default();
        let Some(value) = observation.numeric_value() else {
            continue;
        };
        if in_early {
            early_values.push(value);
        } else {
            late_values.push(value);
        }
    }

    Ok(groups
        .into_iter()
        .map(|(entity, (early_values, late_values))| EraStat {
            entity: entity.to_string(),
            std_early: sample_std(&early_values),
            std_late: sample_std(&late_values),
        })
        .collect())
}

/// Ranks entities by `std_late - std_early`, most negative first.
///
/// Only entities with a defined statistic in both eras are returned. Ties in
/// `delta` are broken by entity name. The full ranking is returned; use
/// [`decreasing`] for the entities whose variability shrank.
pub fn compare(
    observations: &[Observation],
    early: YearRange,
    late: YearRange,
) -> Result<Vec<VariabilityDelta>> {
    let stats = era_stats(observations, early, late)?;
    let candidates = stats.len();

    let mut deltas: Vec<VariabilityDelta> = stats.iter().filter_map(EraStat::to_delta).collect();
    deltas.sort_by(|a, b| {
        a.delta
            .total_cmp(&b.delta)
            .then_with(|| a.entity.cmp(&b.entity))
    });

    debug!(
        early = %early,
        late = %late,
        candidates,
        ranked = deltas.len(),
        "compared era variability"
    );
    Ok(deltas)
}

/// The leading entries of a [`compare`] ranking with a negative delta.
pub fn decreasing(ranked: &[VariabilityDelta]) -> &[VariabilityDelta] {
    let end = ranked.partition_point(VariabilityDelta::is_decreasing);
    &ranked[..end]
}
