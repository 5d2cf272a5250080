//! BMI calculations
//!
//! Converts a height/weight pair into a Body Mass Index under either unit
//! system and classifies the result into one of four weight categories.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: No side effects, safe to call on every keystroke
//! 2. **Absence over Failure**: Incomplete input yields `None`, never an error
//! 3. **Unit Fidelity**: Each unit system uses its own formula, no conversion

use crate::units::UnitSystem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversion factor of the imperial BMI formula (lb/in² to kg/m²)
pub const IMPERIAL_FACTOR: f64 = 703.0;

// ============================================================================
// BMI Calculation
// ============================================================================

/// Calculate BMI from height and weight in the given unit system
///
/// Metric: BMI = weight(kg) / (height(cm) / 100)²
/// Imperial: BMI = weight(lb) × 703 / height(in)²
///
/// Returns `None` when either input is zero or NaN, or when the arithmetic
/// does not produce a finite number.
pub fn compute_bmi(height: f64, weight: f64, unit_system: UnitSystem) -> Option<f64> {
    if is_blank(height) || is_blank(weight) {
        return None;
    }

    let bmi = match unit_system {
        UnitSystem::Metric => {
            let height_m = height / 100.0;
            weight / (height_m * height_m)
        }
        UnitSystem::Imperial => (weight * IMPERIAL_FACTOR) / (height * height),
    };

    bmi.is_finite().then_some(bmi)
}

/// Zero and NaN count as "not entered"
fn is_blank(value: f64) -> bool {
    value == 0.0 || value.is_nan()
}

// ============================================================================
// BMI Categories
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Get the half-open BMI range `[min, max)` for this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Range as shown on the result scale
    pub fn range_label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "<18.5",
            BmiCategory::Normal => "18.5-24.9",
            BmiCategory::Overweight => "25-29.9",
            BmiCategory::Obese => ">30",
        }
    }

    /// Get a human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// General guidance for this category
    pub fn recommendations(&self) -> Recommendations {
        match self {
            BmiCategory::Underweight => Recommendations {
                title: "Healthy Weight Gain Tips",
                tips: [
                    "Eat more frequently throughout the day",
                    "Choose nutrient-rich foods",
                    "Add healthy snacks between meals",
                ],
                lifestyle: [
                    "Incorporate strength training exercises",
                    "Consult with a nutritionist for a personalized meal plan",
                    "Track your caloric intake to ensure sufficient energy",
                ],
            },
            BmiCategory::Normal => Recommendations {
                title: "Maintain Your Healthy Weight",
                tips: [
                    "Continue balanced, portion-controlled meals",
                    "Eat a variety of foods from all food groups",
                    "Stay hydrated with water throughout the day",
                ],
                lifestyle: [
                    "Regular physical activity (150 minutes/week)",
                    "Get adequate sleep (7-9 hours/night)",
                    "Practice stress management techniques",
                ],
            },
            BmiCategory::Overweight => Recommendations {
                title: "Weight Management Strategies",
                tips: [
                    "Reduce portion sizes gradually",
                    "Choose whole grains over refined grains",
                    "Increase intake of vegetables and fruits",
                ],
                lifestyle: [
                    "Aim for 30 minutes of daily physical activity",
                    "Keep a food diary to track eating patterns",
                    "Find support through friends or health professionals",
                ],
            },
            BmiCategory::Obese => Recommendations {
                title: "Health Improvement Steps",
                tips: [
                    "Focus on whole, unprocessed foods",
                    "Control portion sizes with smaller plates",
                    "Plan meals ahead to avoid unhealthy choices",
                ],
                lifestyle: [
                    "Start with low-impact exercises like walking or swimming",
                    "Consider working with a healthcare provider",
                    "Set realistic, achievable goals",
                ],
            },
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify BMI into category
///
/// Thresholds are left-inclusive: 18.5 is Normal, 25 is Overweight,
/// 30 is Obese. Callers pass a finite BMI from [`compute_bmi`].
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Dietary and lifestyle guidance attached to a BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub title: &'static str,
    pub tips: [&'static str; 3],
    pub lifestyle: [&'static str; 3],
}

/// Shown alongside every recommendation set
pub const DISCLAIMER: &str = "These are general recommendations. Please consult with healthcare professionals for personalized advice.";

// ============================================================================
// Measurement
// ============================================================================

/// Height and weight as entered on the form
///
/// Fields stay `None` until the user has typed a value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BmiMeasurement {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl BmiMeasurement {
    pub fn new(height: f64, weight: f64, unit_system: UnitSystem) -> Self {
        Self {
            height: Some(height),
            weight: Some(weight),
            unit_system,
        }
    }

    /// BMI of this measurement, `None` while incomplete
    pub fn bmi(&self) -> Option<f64> {
        compute_bmi(self.height?, self.weight?, self.unit_system)
    }

    /// Category of this measurement, `None` while no BMI is available
    pub fn category(&self) -> Option<BmiCategory> {
        self.bmi().map(classify_bmi)
    }
}
