//! Unit systems for BMI input
//!
//! Measurements are taken as entered: centimeters and kilograms under the
//! metric system, inches and pounds under the imperial system. The BMI engine
//! applies the matching formula instead of converting between systems.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Unit System
// ============================================================================

/// Unit system a measurement was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Height in centimeters, weight in kilograms
    #[default]
    Metric,
    /// Height in inches, weight in pounds
    Imperial,
}

impl UnitSystem {
    /// Map the metric/imperial toggle of a form onto a unit system
    pub fn from_is_metric(is_metric: bool) -> Self {
        if is_metric {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        }
    }

    pub fn is_metric(&self) -> bool {
        matches!(self, UnitSystem::Metric)
    }

    /// Abbreviation of the height unit
    pub fn height_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }

    /// Abbreviation of the weight unit
    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Feet/Inches Height Entry
// ============================================================================

/// Imperial height entered as feet plus inches
///
/// A blank inches field counts as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeetInchesHeight {
    pub feet: f64,
    #[serde(default)]
    pub inches: f64,
}

impl FeetInchesHeight {
    /// Convert to total inches
    pub fn to_total_inches(&self) -> f64 {
        self.feet * 12.0 + self.inches
    }
}
