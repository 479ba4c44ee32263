//! Data model for global surface-temperature indicators.
//!
//! Every type here is an immutable value produced by a pure function in
//! `gts-transform`; nothing is shared or cached between pipeline runs.
//!
//! - [`ColumnLayout`]: classification of a wide table's headers into
//!   identifier, year, and ignored columns
//! - [`Observation`]: one tidy `(entity, year, value)` row
//! - [`YearRange`]: an inclusive era of years
//! - [`EraStat`] / [`VariabilityDelta`]: per-entity dispersion in two eras

pub mod error;
pub mod layout;
pub mod observation;
pub mod range;
pub mod variability;

pub use error::{ErrorKind, ModelError, Result};
pub use layout::{ColumnLayout, YearColumn, parse_year_column};
pub use observation::Observation;
pub use range::YearRange;
pub use variability::{EraStat, VariabilityDelta};
