//! Entity ranking by mean value.

use std::collections::BTreeMap;

use gts_model::Observation;

use crate::types::EntityMean;

/// The `n` entities with the largest mean value, largest first.
///
/// Missing values are skipped; entities with no values are left out. Equal
/// means are ordered by entity name.
pub fn top_mean(observations: &[Observation], n: usize) -> Vec<EntityMean> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for observation in observations {
        let Some(value) = observation.numeric_value() else {
            continue;
        };
        let entry = sums.entry(observation.entity.as_str()).or_default();
        entry.0 += value;
        entry.1 += 1;
    }

    let mut means: Vec<EntityMean> = sums
        .into_iter()
        .map(|(entity, (sum, count))| EntityMean {
            entity: entity.to_string(),
            mean: sum / count as f64,
            count,
        })
        .collect();
    means.sort_by(|a, b| {
        b.mean
            .total_cmp(&a.mean)
            .then_with(|| a.entity.cmp(&b.entity))
    });
    means.truncate(n);
    means
}
