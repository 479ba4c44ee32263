//! Data layer of the global temperature dashboard.
//!
//! Loads the indicator CSV once, then recomputes every table a dashboard
//! view shows from the current filter. Rendering is left to the caller;
//! the tables handed out are plain values and never change after they are
//! built.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use gts_dashboard::{Dashboard, DashboardConfig, init_logging, LogConfig};
//! use gts_transform::ObservationFilter;
//!
//! let config = DashboardConfig::load_from(Path::new("dashboard.toml"))?;
//! init_logging(&LogConfig::from_settings(&config.logging)?)?;
//!
//! let dashboard = Dashboard::load(&config)?;
//! let view = dashboard.view(&ObservationFilter::new().with_entity("Chile"))?;
//! for row in view.decreasing_variability() {
//!     println!("{} {:+.3}", row.entity, row.delta);
//! }
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;

pub use config::{ComparisonYears, DashboardConfig, EraSettings, LogSettings};
pub use dashboard::{Dashboard, DashboardView};
pub use error::{DashboardError, Result};
pub use logging::{LogConfig, LogFormat, init_logging, init_logging_with_writer};
