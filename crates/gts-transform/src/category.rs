//! Yearly means per entity category.

use std::collections::BTreeMap;

use gts_model::Observation;

use crate::types::{CategoryMap, CategoryYearMean};

/// Mean value per `(year, category)`, sorted by year then category.
///
/// Entities without a category are skipped, as are groups whose values are
/// all missing.
pub fn category_year_means(
    observations: &[Observation],
    categories: &CategoryMap,
) -> Vec<CategoryYearMean> {
    let mut groups: BTreeMap<(i32, &str), (f64, usize)> = BTreeMap::new();
    for observation in observations {
        let Some(category) = categories.category_of(&observation.entity) else {
            continue;
        };
        let Some(value) = observation.numeric_value() else {
            continue;
        };
        let entry = groups.entry((observation.year, category)).or_default();
        entry.0 += value;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|((year, category), (sum, count))| CategoryYearMean {
            year,
            category: category.to_string(),
            mean: sum / count as f64,
            count,
        })
        .collect()
}
