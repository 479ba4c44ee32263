//! Per-entity dispersion across two eras.

use serde::{Deserialize, Serialize};

/// Sample standard deviation of one entity in the early and late eras.
///
/// An era is `None` when fewer than two values fall inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EraStat {
    pub entity: String,
    pub std_early: Option<f64>,
    pub std_late: Option<f64>,
}

impl EraStat {
    /// Joins both eras into a delta, or `None` when either is undefined.
    pub fn to_delta(&self) -> Option<VariabilityDelta> {
        let (std_early, std_late) = (self.std_early?, self.std_late?);
        Some(VariabilityDelta {
            entity: self.entity.clone(),
            std_early,
            std_late,
            delta: std_late - std_early,
        })
    }
}

/// Change in dispersion between eras, `delta = std_late - std_early`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariabilityDelta {
    pub entity: String,
    pub std_early: f64,
    pub std_late: f64,
    pub delta: f64,
}

impl VariabilityDelta {
    /// True when the late era is less variable than the early one.
    pub fn is_decreasing(&self) -> bool {
        self.delta < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_delta_requires_both_eras() {
        let stat = EraStat {
            entity: "A".to_string(),
            std_early: Some(2.0),
            std_late: Some(0.5),
        };
        let delta = stat.to_delta().unwrap();
        assert_eq!(delta.delta, -1.5);
        assert!(delta.is_decreasing());

        let half = EraStat {
            std_late: None,
            ..stat
        };
        assert!(half.to_delta().is_none());
    }
}
