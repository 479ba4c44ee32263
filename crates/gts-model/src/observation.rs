//! Tidy observation rows.

use serde::{Deserialize, Serialize};

/// One `(entity, year, value)` observation in long format.
///
/// `identifiers` carries every identifier column of the source row, entity
/// column included, in layout order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub entity: String,
    pub year: i32,
    /// `None` for empty or non-numeric cells.
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<(String, String)>,
}

impl Observation {
    /// Creates an observation with no carried identifiers.
    pub fn new(entity: impl Into<String>, year: i32, value: Option<f64>) -> Self {
        Self {
            entity: entity.into(),
            year,
            value,
            identifiers: Vec::new(),
        }
    }

    /// Appends an identifier field.
    #[must_use]
    pub fn with_identifier(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.identifiers.push((column.into(), value.into()));
        self
    }

    /// Looks up a carried identifier by column name.
    pub fn identifier(&self, column: &str) -> Option<&str> {
        self.identifiers
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// The value when present and finite.
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.filter(|v| v.is_finite())
    }
}
