//! Inclusive year ranges.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// An inclusive `[min, max]` span of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Fails with [`ModelError::InvalidRange`] when `min > max`.
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(ModelError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    /// True when both ranges include at least one common year.
    pub fn overlaps(&self, other: &YearRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
