//! Shared utilities for the global temperature indicator crates.

pub mod polars;

pub use polars::{any_to_f64, any_to_string, format_numeric, parse_f64};
