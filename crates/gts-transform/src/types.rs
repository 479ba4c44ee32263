//! Row types for the derived dashboard tables.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Value change of one entity between two years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearPairChange {
    pub entity: String,
    pub from_year: i32,
    pub to_year: i32,
    pub from_value: f64,
    pub to_value: f64,
    /// `to_value - from_value`
    pub change: f64,
}

/// Mean value of one entity over the observations it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMean {
    pub entity: String,
    pub mean: f64,
    /// Non-missing values averaged.
    pub count: usize,
}

/// Mean value of all entities of a category in one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryYearMean {
    pub year: i32,
    pub category: String,
    pub mean: f64,
    pub count: usize,
}

/// Assignment of entities to categories (continent, development status, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryMap {
    /// Category for entities missing from `assignments`.
    pub fallback: Option<String>,
    /// Entity name to category.
    pub assignments: BTreeMap<String, String>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_assignment(mut self, entity: impl Into<String>, category: impl Into<String>) -> Self {
        self.assignments.insert(entity.into(), category.into());
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, category: impl Into<String>) -> Self {
        self.fallback = Some(category.into());
        self
    }

    /// Distinct assigned categories, sorted. The fallback is not included.
    pub fn categories(&self) -> Vec<String> {
        self.assignments
            .values()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Category of `entity`, falling back when unassigned.
    pub fn category_of(&self, entity: &str) -> Option<&str> {
        self.assignments
            .get(entity)
            .or(self.fallback.as_ref())
            .map(String::as_str)
    }
}
