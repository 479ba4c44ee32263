//! Dashboard configuration.
//!
//! Stored as TOML. Every field has a default matching the IMF annual surface
//! temperature export, so an empty file is a valid configuration.

use std::path::{Path, PathBuf};

use gts_ingest::IngestOptions;
use gts_model::YearRange;
use gts_transform::CategoryMap;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::logging::LogFormat;

/// File name of the IMF climate indicator download.
pub const DEFAULT_DATA_FILE: &str =
    "Indicator_3_1_Climate_Indicators_Annual_Mean_Global_Surface_Temperature_577579683071085080.csv";

// =============================================================================
// ROOT CONFIG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Indicator CSV. Relative paths are resolved against the config file.
    pub data_path: PathBuf,

    /// Name of the value column in the long table.
    pub value_column: String,

    /// Length of the mean-value ranking.
    pub top_n: usize,

    /// Entities shown in the scatter when no entity is selected.
    pub sample_size: usize,

    // Tables follow plain values so the TOML output stays valid.
    /// How the CSV is read.
    pub ingest: IngestOptions,

    /// Eras compared by the variability ranking.
    pub eras: EraSettings,

    /// Years compared by the year-over-year change table.
    pub comparison: ComparisonYears,

    /// Entity grouping for the category trend table.
    pub categories: CategoryMap,

    /// Entity grouping offered by the region selector.
    pub regions: CategoryMap,

    pub logging: LogSettings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            value_column: "TempChange".to_string(),
            top_n: 5,
            sample_size: 10,
            ingest: IngestOptions::default(),
            eras: EraSettings::default(),
            comparison: ComparisonYears::default(),
            categories: CategoryMap::new().with_fallback("Developing"),
            regions: CategoryMap::new(),
            logging: LogSettings::default(),
        }
    }
}

impl DashboardConfig {
    /// Loads and validates a TOML config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DashboardError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self =
            toml::from_str(&content).map_err(|source| DashboardError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        if config.data_path.is_relative()
            && let Some(dir) = path.parent()
        {
            config.data_path = dir.join(&config.data_path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Serializes the config as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks settings that would make every view fail.
    pub fn validate(&self) -> Result<()> {
        if self.ingest.identifier_columns.is_empty() {
            return Err(DashboardError::InvalidConfig {
                message: "ingest.identifier_columns must not be empty".to_string(),
            });
        }
        if self.value_column.trim().is_empty() {
            return Err(DashboardError::InvalidConfig {
                message: "value_column must not be empty".to_string(),
            });
        }
        let (early, late) = (self.eras.early, self.eras.late);
        for range in [early, late] {
            range
                .validate()
                .map_err(|e| DashboardError::InvalidConfig {
                    message: format!("eras: {e}"),
                })?;
        }
        if early.overlaps(&late) {
            return Err(DashboardError::InvalidConfig {
                message: format!("eras: {early} and {late} overlap"),
            });
        }
        Ok(())
    }

    /// Column holding entity names.
    pub fn entity_column(&self) -> &str {
        self.ingest
            .identifier_columns
            .first()
            .map_or("Country", String::as_str)
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EraSettings {
    pub early: YearRange,
    pub late: YearRange,
}

impl Default for EraSettings {
    fn default() -> Self {
        Self {
            early: YearRange::new(1961, 1992),
            late: YearRange::new(1993, 2024),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonYears {
    pub from_year: i32,
    pub to_year: i32,
}

impl Default for ComparisonYears {
    fn default() -> Self {
        Self {
            from_year: 2023,
            to_year: 2024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
    pub format: LogFormat,
    pub with_timestamps: bool,
    /// Include the module path of each event.
    pub with_target: bool,
    /// Write logs here instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            with_timestamps: false,
            with_target: false,
            log_file: None,
        }
    }
}
