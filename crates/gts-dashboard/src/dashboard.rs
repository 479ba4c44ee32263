//! One-call pipeline from config to every table a dashboard view shows.

use gts_ingest::read_indicator_csv;
use gts_model::{Observation, VariabilityDelta};
use gts_transform::{
    CategoryYearMean, EntityMean, ObservationFilter, Selection, YearPairChange,
    category_year_means, compare, decreasing, entity_options, observations_frame, reshape_with_layout,
    sample_entities, top_mean, year_options, year_pair_change,
};
use polars::prelude::DataFrame;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::error::Result;

/// Tidy observations loaded once, plus the settings every view uses.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    observations: Vec<Observation>,
}

/// Tables derived from one filter. Built in full on every call to
/// [`Dashboard::view`].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub filter: ObservationFilter,
    /// Observations passing the filter, in load order.
    pub observations: Vec<Observation>,
    /// Points for the value-by-year scatter. Without a selected entity, every
    /// year of the first `sample_size` entities.
    pub scatter: Vec<Observation>,
    /// Full era variability ranking, most negative delta first.
    pub variability: Vec<VariabilityDelta>,
    /// Change between the configured comparison years. Ignores the year filters.
    pub year_changes: Vec<YearPairChange>,
    pub top_means: Vec<EntityMean>,
    /// Yearly means per category. Ignores the entity and region filters.
    pub category_trends: Vec<CategoryYearMean>,
}

impl DashboardView {
    /// Entities whose variability shrank between the eras.
    pub fn decreasing_variability(&self) -> &[VariabilityDelta] {
        decreasing(&self.variability)
    }
}

impl Dashboard {
    /// Reads the configured CSV and reshapes it.
    pub fn load(config: &DashboardConfig) -> Result<Self> {
        let span = tracing::info_span!("dashboard_load", path = %config.data_path.display());
        let _guard = span.enter();

        let table = read_indicator_csv(&config.data_path, &config.ingest)?;
        let observations = reshape_with_layout(&table.frame, &table.layout)?;

        info!(
            entities = table.height(),
            observations = observations.len(),
            "dashboard data ready"
        );
        Ok(Self::from_observations(config.clone(), observations))
    }

    pub fn from_observations(config: DashboardConfig, observations: Vec<Observation>) -> Self {
        Self {
            config,
            observations,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Entities offered by the entity selector.
    pub fn entity_options(&self) -> Vec<String> {
        entity_options(&self.observations)
    }

    /// Years offered by the year selector.
    pub fn year_options(&self) -> Vec<i32> {
        year_options(&self.observations)
    }

    /// Regions offered by the region selector. Unassigned entities have none.
    pub fn region_options(&self) -> Vec<String> {
        self.config.regions.categories()
    }

    /// Long table of the filtered observations for the raw data view.
    pub fn long_frame(&self, filter: &ObservationFilter) -> Result<DataFrame> {
        let filtered = filter.apply(&self.observations, &self.config.regions)?;
        Ok(observations_frame(
            &filtered,
            self.config.entity_column(),
            &self.config.value_column,
        )?)
    }

    /// Computes every table for `filter`.
    ///
    /// # Errors
    ///
    /// Fails when the filter's year range is reversed, or when the
    /// observations hold two values for one entity and year.
    pub fn view(&self, filter: &ObservationFilter) -> Result<DashboardView> {
        let config = &self.config;
        let regions = &config.regions;
        let observations = filter.apply(&self.observations, regions)?;

        // Year selections would leave one side of the year pair empty and
        // reduce the scatter to a single column.
        let all_years = ObservationFilter {
            entity: filter.entity.clone(),
            region: filter.region.clone(),
            ..ObservationFilter::default()
        }
        .apply(&self.observations, regions)?;

        let scatter = match &filter.entity {
            Selection::Only(_) => observations.clone(),
            Selection::All => {
                let sample = sample_entities(&all_years, config.sample_size);
                all_years
                    .iter()
                    .filter(|o| sample.contains(&o.entity))
                    .cloned()
                    .collect()
            }
        };

        let variability = compare(&observations, config.eras.early, config.eras.late)?;
        let top_means = top_mean(&observations, config.top_n);

        let year_changes = year_pair_change(
            &all_years,
            config.comparison.from_year,
            config.comparison.to_year,
        )?;

        let all_entities = ObservationFilter {
            year: filter.year.clone(),
            year_range: filter.year_range,
            ..ObservationFilter::default()
        }
        .apply(&self.observations, regions)?;
        let category_trends = category_year_means(&all_entities, &config.categories);

        debug!(
            observations = observations.len(),
            scatter = scatter.len(),
            ranked = variability.len(),
            year_changes = year_changes.len(),
            category_rows = category_trends.len(),
            "computed dashboard view"
        );

        Ok(DashboardView {
            filter: filter.clone(),
            observations,
            scatter,
            variability,
            year_changes,
            top_means,
            category_trends,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gts_model::YearRange;
    use gts_transform::CategoryMap;

    fn dashboard() -> Dashboard {
        let mut observations = Vec::new();
        for (entity, values) in [
            ("Chile", [1.0, 3.0, 1.0, 1.0]),
            ("Kenya", [0.0, 0.0, 2.0, 4.0]),
            ("Norway", [2.0, 2.0, 2.0, 2.0]),
        ] {
            for (year, value) in [1961, 1962, 1993, 1994].into_iter().zip(values) {
                observations.push(Observation::new(entity, year, Some(value)));
            }
        }
        let mut config = DashboardConfig::default();
        config.sample_size = 2;
        config.top_n = 2;
        config.comparison.from_year = 1993;
        config.comparison.to_year = 1994;
        config.regions = CategoryMap::new()
            .with_assignment("Chile", "South America")
            .with_assignment("Norway", "Europe");
        Dashboard::from_observations(config, observations)
    }

    #[test]
    fn test_view_without_filter() {
        let view = dashboard().view(&ObservationFilter::new()).unwrap();

        assert_eq!(view.observations.len(), 12);
        assert!(view.scatter.iter().all(|o| o.entity != "Norway"));
        assert_eq!(view.scatter.len(), 8);

        let ranked: Vec<&str> = view.variability.iter().map(|d| d.entity.as_str()).collect();
        assert_eq!(ranked, ["Chile", "Norway", "Kenya"]);
        assert_eq!(view.decreasing_variability().len(), 1);

        assert_eq!(view.top_means.len(), 2);
        assert_eq!(view.top_means[0].entity, "Norway");
        assert_eq!(view.year_changes.len(), 3);
        // Every entity falls back to one category.
        assert_eq!(view.category_trends.len(), 4);
    }

    #[test]
    fn test_year_filter_keeps_year_changes() {
        let view = dashboard()
            .view(&ObservationFilter::new().with_year(1961))
            .unwrap();
        assert_eq!(view.observations.len(), 3);
        assert!(view.variability.is_empty());
        assert_eq!(view.year_changes.len(), 3);
        assert_eq!(view.category_trends.len(), 1);
    }

    #[test]
    fn test_entity_filter_keeps_category_trends() {
        let view = dashboard()
            .view(&ObservationFilter::new().with_entity("Kenya"))
            .unwrap();
        assert_eq!(view.scatter.len(), 4);
        assert_eq!(view.year_changes.len(), 1);
        assert_eq!(view.year_changes[0].change, 2.0);
        assert_eq!(view.category_trends[0].count, 3);
    }

    #[test]
    fn test_year_filter_keeps_scatter_sample() {
        let view = dashboard()
            .view(&ObservationFilter::new().with_year_range(YearRange::new(1993, 1994)))
            .unwrap();
        assert_eq!(view.observations.len(), 6);
        // Two sampled entities, all four years each.
        assert_eq!(view.scatter.len(), 8);
    }

    #[test]
    fn test_region_filter_restricts_tables() {
        let dashboard = dashboard();
        assert_eq!(dashboard.region_options(), ["Europe", "South America"]);

        let view = dashboard
            .view(&ObservationFilter::new().with_region("Europe"))
            .unwrap();
        assert!(view.observations.iter().all(|o| o.entity == "Norway"));
        assert!(view.scatter.iter().all(|o| o.entity == "Norway"));
        assert_eq!(view.scatter.len(), 4);
        let ranked: Vec<&str> = view.variability.iter().map(|d| d.entity.as_str()).collect();
        assert_eq!(ranked, ["Norway"]);
        let top: Vec<&str> = view.top_means.iter().map(|m| m.entity.as_str()).collect();
        assert_eq!(top, ["Norway"]);
        assert_eq!(view.year_changes.len(), 1);
        assert_eq!(view.category_trends[0].count, 3);
    }

    #[test]
    fn test_reversed_range_is_an_error() {
        let filter = ObservationFilter::new().with_year_range(YearRange::new(2000, 1990));
        assert!(dashboard().view(&filter).is_err());
    }
}
