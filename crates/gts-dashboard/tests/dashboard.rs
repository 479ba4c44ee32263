//! Integration tests for the config-to-view pipeline.

use std::fs;
use std::path::Path;

use gts_dashboard::{Dashboard, DashboardConfig, DashboardError};
use gts_ingest::IngestError;
use gts_model::YearRange;
use gts_transform::ObservationFilter;
use tempfile::TempDir;

const CSV: &str = "\
ObjectId,Country,ISO3,Source,1961,1962,1993,1994
1,Chile,CHL,IMF,1.0,3.0,1.0,1.0
2,Kenya,KEN,IMF,0.0,0.0,2.0,4.0
3,Norway,NOR,IMF,2.0,2.0,2.0,
";

const CONFIG: &str = r#"
data_path = "indicator.csv"
value_column = "TempChange"
top_n = 2

[ingest]
identifier_columns = ["Country", "ISO3"]

[comparison]
from_year = 1993
to_year = 1994

[categories]
fallback = "Developing"

[categories.assignments]
Norway = "Developed"

[regions.assignments]
Chile = "South America"
Kenya = "Africa"
"#;

fn write_fixture(dir: &Path) -> DashboardConfig {
    fs::write(dir.join("indicator.csv"), CSV).unwrap();
    let config_path = dir.join("dashboard.toml");
    fs::write(&config_path, CONFIG).unwrap();
    DashboardConfig::load_from(&config_path).unwrap()
}

#[test]
fn loads_config_relative_data_path() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(dir.path());
    assert_eq!(config.data_path, dir.path().join("indicator.csv"));

    let dashboard = Dashboard::load(&config).unwrap();
    assert_eq!(dashboard.observations().len(), 12);
    assert_eq!(dashboard.entity_options(), ["Chile", "Kenya", "Norway"]);
    assert_eq!(dashboard.year_options(), [1961, 1962, 1993, 1994]);
}

#[test]
fn full_view_tables() {
    let dir = TempDir::new().unwrap();
    let dashboard = Dashboard::load(&write_fixture(dir.path())).unwrap();
    let view = dashboard.view(&ObservationFilter::new()).unwrap();

    // Norway has a single late value, so no late std.
    let ranked: Vec<&str> = view.variability.iter().map(|d| d.entity.as_str()).collect();
    assert_eq!(ranked, ["Chile", "Kenya"]);
    let decreasing: Vec<&str> = view
        .decreasing_variability()
        .iter()
        .map(|d| d.entity.as_str())
        .collect();
    assert_eq!(decreasing, ["Chile"]);

    let changes: Vec<(&str, f64)> = view
        .year_changes
        .iter()
        .map(|c| (c.entity.as_str(), c.change))
        .collect();
    assert_eq!(changes, [("Chile", 0.0), ("Kenya", 2.0)]);

    assert_eq!(view.top_means[0].entity, "Norway");
    assert_eq!(view.top_means.len(), 2);

    let categories: Vec<(i32, &str)> = view
        .category_trends
        .iter()
        .filter(|row| row.year == 1994)
        .map(|row| (row.year, row.category.as_str()))
        .collect();
    assert_eq!(categories, [(1994, "Developing")]);
}

#[test]
fn region_and_year_range_filter() {
    let dir = TempDir::new().unwrap();
    let dashboard = Dashboard::load(&write_fixture(dir.path())).unwrap();
    assert_eq!(dashboard.region_options(), ["Africa", "South America"]);

    let filter = ObservationFilter::new()
        .with_region("Africa")
        .with_year_range(YearRange::new(1961, 1993));
    let view = dashboard.view(&filter).unwrap();

    let years: Vec<(&str, i32)> = view
        .observations
        .iter()
        .map(|o| (o.entity.as_str(), o.year))
        .collect();
    assert_eq!(years, [("Kenya", 1961), ("Kenya", 1962), ("Kenya", 1993)]);
    let top: Vec<(&str, f64)> = view
        .top_means
        .iter()
        .map(|m| (m.entity.as_str(), m.mean))
        .collect();
    assert_eq!(top, [("Kenya", 2.0 / 3.0)]);
    // Kenya has one late value inside the range.
    assert!(view.variability.is_empty());
    assert!(view.scatter.iter().all(|o| o.entity == "Kenya"));
    assert_eq!(view.scatter.len(), 4);
}

#[test]
fn long_frame_for_selected_entity() {
    let dir = TempDir::new().unwrap();
    let dashboard = Dashboard::load(&write_fixture(dir.path())).unwrap();
    let frame = dashboard
        .long_frame(&ObservationFilter::new().with_entity("Kenya"))
        .unwrap();

    assert_eq!(frame.height(), 4);
    let names: Vec<&str> = frame
        .get_column_names()
        .into_iter()
        .map(|n| n.as_str())
        .collect();
    assert_eq!(names, ["Country", "ISO3", "Year", "TempChange"]);
}

#[test]
fn missing_data_file_is_an_ingest_error() {
    let dir = TempDir::new().unwrap();
    let config = DashboardConfig {
        data_path: dir.path().join("absent.csv"),
        ..DashboardConfig::default()
    };
    assert!(matches!(
        Dashboard::load(&config),
        Err(DashboardError::Ingest(IngestError::FileNotFound { .. }))
    ));
}

#[test]
fn unreadable_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = DashboardConfig::load_from(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, DashboardError::ConfigRead { .. }));

    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "top_n = \"five\"").unwrap();
    let err = DashboardConfig::load_from(&bad).unwrap_err();
    assert!(matches!(err, DashboardError::ConfigParse { .. }));
}
