//! Temperature indicator transformations.
//!
//! Turns a wide indicator frame into tidy observations and derives the
//! tables a dashboard view shows. Every function is a pure transform of its
//! inputs: nothing is cached, so a view is recomputed in full whenever its
//! filter changes.
//!
//! # Overview
//!
//! - **Reshaping**: [`reshape`] melts year columns into [`Observation`]s;
//!   [`widen`] pivots them back
//! - **Era variability**: [`compare`] ranks entities by the change in sample
//!   standard deviation between two eras
//! - **Filtering**: [`ObservationFilter`] and selector option lists
//! - **Derived views**: [`year_pair_change`], [`top_mean`], [`category_year_means`]
//!
//! # Example
//!
//! ```ignore
//! use gts_model::YearRange;
//! use gts_transform::{compare, decreasing, reshape};
//!
//! let observations = reshape(&frame, &["Country", "ISO3"])?;
//! let ranked = compare(&observations, YearRange::new(1961, 1992), YearRange::new(1993, 2024))?;
//! for row in decreasing(&ranked) {
//!     println!("{}: {:+.3}", row.entity, row.delta);
//! }
//! ```
//!
//! [`Observation`]: gts_model::Observation

mod category;
mod change;
mod error;
mod filter;
mod frame;
mod ranking;
mod reshape;
mod types;
mod variability;

// Core types
pub use types::{CategoryMap, CategoryYearMean, EntityMean, YearPairChange};

// Error type
pub use error::{Result, TransformError};

// Reshaping
pub use frame::{observations_frame, widen};
pub use reshape::{reshape, reshape_with_layout};

// Era variability
pub use variability::{compare, decreasing, era_stats, sample_std};

// Filtering
pub use filter::{ObservationFilter, Selection, entity_options, sample_entities, year_options};

// Derived views
pub use category::category_year_means;
pub use change::year_pair_change;
pub use ranking::top_mean;
