//! Observation filters and selector options.

use std::collections::BTreeSet;

use gts_model::{Observation, YearRange};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::CategoryMap;

/// Either every value or a single one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    pub fn matches<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }

}

/// Filter applied to observations before any view is computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationFilter {
    pub entity: Selection<String>,
    /// Region of the entity, resolved through a [`CategoryMap`].
    pub region: Selection<String>,
    pub year: Selection<i32>,
    pub year_range: Option<YearRange>,
}

impl ObservationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Selection::Only(entity.into());
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Selection::Only(region.into());
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Selection::Only(year);
        self
    }

    #[must_use]
    pub fn with_year_range(mut self, range: YearRange) -> Self {
        self.year_range = Some(range);
        self
    }

    /// An entity without a region only passes when no region is selected.
    pub fn matches(&self, observation: &Observation, regions: &CategoryMap) -> bool {
        self.entity.matches(observation.entity.as_str())
            && match &self.region {
                Selection::All => true,
                Selection::Only(region) => {
                    regions.category_of(&observation.entity) == Some(region.as_str())
                }
            }
            && self.year.matches(&observation.year)
            && self
                .year_range
                .is_none_or(|range| range.contains(observation.year))
    }

    /// Observations passing the filter, in input order.
    ///
    /// # Errors
    ///
    /// Fails when `year_range` has `min > max`.
    pub fn apply(
        &self,
        observations: &[Observation],
        regions: &CategoryMap,
    ) -> Result<Vec<Observation>> {
        if let Some(range) = &self.year_range {
            range.validate()?;
        }
        Ok(observations
            .iter()
            .filter(|o| self.matches(o, regions))
            .cloned()
            .collect())
    }
}

/// Distinct entity names, sorted.
pub fn entity_options(observations: &[Observation]) -> Vec<String> {
    observations
        .iter()
        .map(|o| o.entity.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct years, ascending.
pub fn year_options(observations: &[Observation]) -> Vec<i32> {
    observations
        .iter()
        .map(|o| o.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The first `n` distinct entities in order of appearance.
pub fn sample_entities(observations: &[Observation], n: usize) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut sample = Vec::new();
    for observation in observations {
        if sample.len() == n {
            break;
        }
        if seen.insert(observation.entity.as_str()) {
            sample.push(observation.entity.clone());
        }
    }
    sample
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observations() -> Vec<Observation> {
        vec![
            Observation::new("Peru", 1961, Some(0.1)),
            Observation::new("Chile", 1961, Some(0.2)),
            Observation::new("Peru", 1990, Some(0.3)),
            Observation::new("Chile", 2024, None),
        ]
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let kept = ObservationFilter::new()
            .apply(&observations(), &CategoryMap::new())
            .unwrap();
        assert_eq!(kept, observations());
    }

    #[test]
    fn test_entity_and_range() {
        let filter = ObservationFilter::new()
            .with_entity("Peru")
            .with_year_range(YearRange::new(1980, 2024));
        let kept = filter.apply(&observations(), &CategoryMap::new()).unwrap();
        assert_eq!(kept, vec![Observation::new("Peru", 1990, Some(0.3))]);
    }

    #[test]
    fn test_single_year() {
        let kept = ObservationFilter::new()
            .with_year(1961)
            .apply(&observations(), &CategoryMap::new())
            .unwrap();
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_invalid_range_is_rejected() {
        let filter = ObservationFilter::new().with_year_range(YearRange::new(2024, 1980));
        assert!(filter.apply(&observations(), &CategoryMap::new()).is_err());
    }

    #[test]
    fn test_region_selection() {
        let regions = CategoryMap::new().with_assignment("Chile", "South America");
        let kept = ObservationFilter::new()
            .with_region("South America")
            .apply(&observations(), &regions)
            .unwrap();
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|o| o.entity == "Chile"));

        // Peru has no region, so it never matches a selected one.
        let none = ObservationFilter::new()
            .with_region("Europe")
            .apply(&observations(), &regions)
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_options() {
        assert_eq!(entity_options(&observations()), vec!["Chile", "Peru"]);
        assert_eq!(year_options(&observations()), vec![1961, 1990, 2024]);
    }

    #[test]
    fn test_sample_entities() {
        assert_eq!(sample_entities(&observations(), 10), vec!["Peru", "Chile"]);
        assert_eq!(sample_entities(&observations(), 1), vec!["Peru"]);
        assert!(sample_entities(&observations(), 0).is_empty());
    }
}
