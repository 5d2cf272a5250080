//! Input validation functions
//!
//! The BMI engine accepts any number and reports absence instead of failing.
//! Callers that take user input validate it here first.
//! Uses both custom validators and the `validator` crate for derive macros.

use crate::units::{FeetInchesHeight, UnitSystem};
use validator::Validate;

/// Upper bound for height as entered, in either unit system
pub const MAX_HEIGHT: f64 = 300.0;

/// Upper bound for weight as entered, in either unit system
pub const MAX_WEIGHT: f64 = 500.0;

/// Validate height as entered
pub fn validate_height(height: f64) -> Result<(), String> {
    if height.is_nan() || height.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height <= 0.0 {
        return Err("Height must be positive".to_string());
    }
    if height > MAX_HEIGHT {
        return Err("Height seems too large".to_string());
    }
    Ok(())
}

/// Validate weight as entered
pub fn validate_weight(weight: f64) -> Result<(), String> {
    if weight.is_nan() || weight.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight <= 0.0 {
        return Err("Weight must be positive".to_string());
    }
    if weight > MAX_WEIGHT {
        return Err("Weight seems too large".to_string());
    }
    Ok(())
}

/// Height entered as separate feet and inches fields
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct FeetInchesEntry {
    #[validate(range(min = 2.0, max = 9.0, message = "Height should be between 2-9 feet"))]
    pub feet: f64,
    #[validate(range(min = 0.0, max = 11.0, message = "Inches should be between 0-11"))]
    pub inches: f64,
}

impl From<FeetInchesHeight> for FeetInchesEntry {
    fn from(height: FeetInchesHeight) -> Self {
        Self {
            feet: height.feet,
            inches: height.inches,
        }
    }
}

/// Validate a feet/inches height and return it in total inches
///
/// Only meaningful for imperial measurements.
pub fn validate_feet_inches(height: FeetInchesHeight, unit_system: UnitSystem) -> Result<f64, String> {
    if unit_system.is_metric() {
        return Err("Feet and inches require the imperial unit system".to_string());
    }
    if !height.feet.is_finite() || !height.inches.is_finite() {
        return Err("Please enter a valid height".to_string());
    }
    FeetInchesEntry::from(height)
        .validate()
        .map_err(|errors| first_message(&errors))?;
    Ok(height.to_total_inches())
}

/// First human-readable message of a set of field errors
fn first_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(170.0)]
    #[case(67.0)]
    #[case(300.0)]
    fn test_valid_height(#[case] height: f64) {
        assert!(validate_height(height).is_ok());
    }

    #[rstest]
    #[case(0.0, "Height must be positive")]
    #[case(-5.0, "Height must be positive")]
    #[case(300.5, "Height seems too large")]
    #[case(f64::NAN, "Height must be a valid number")]
    fn test_invalid_height(#[case] height: f64, #[case] message: &str) {
        assert_eq!(validate_height(height), Err(message.to_string()));
    }

    #[rstest]
    #[case(0.0, "Weight must be positive")]
    #[case(500.1, "Weight seems too large")]
    #[case(f64::INFINITY, "Weight must be a valid number")]
    fn test_invalid_weight(#[case] weight: f64, #[case] message: &str) {
        assert_eq!(validate_weight(weight), Err(message.to_string()));
    }

    #[test]
    fn test_valid_weight() {
        assert!(validate_weight(70.0).is_ok());
        assert!(validate_weight(500.0).is_ok());
    }

    #[test]
    fn test_feet_inches_to_total() {
        let height = FeetInchesHeight { feet: 5.0, inches: 7.0 };
        assert_eq!(validate_feet_inches(height, UnitSystem::Imperial), Ok(67.0));
    }

    #[test]
    fn test_feet_inches_out_of_range() {
        let too_tall = FeetInchesHeight { feet: 10.0, inches: 0.0 };
        assert_eq!(
            validate_feet_inches(too_tall, UnitSystem::Imperial),
            Err("Height should be between 2-9 feet".to_string())
        );

        let bad_inches = FeetInchesHeight { feet: 5.0, inches: 12.0 };
        assert_eq!(
            validate_feet_inches(bad_inches, UnitSystem::Imperial),
            Err("Inches should be between 0-11".to_string())
        );
    }

    #[rstest]
    #[case(f64::NAN, 7.0)]
    #[case(5.0, f64::NAN)]
    #[case(f64::INFINITY, 0.0)]
    fn test_feet_inches_not_a_number(#[case] feet: f64, #[case] inches: f64) {
        let height = FeetInchesHeight { feet, inches };
        assert_eq!(
            validate_feet_inches(height, UnitSystem::Imperial),
            Err("Please enter a valid height".to_string())
        );
    }

    #[test]
    fn test_feet_inches_rejected_for_metric() {
        let height = FeetInchesHeight { feet: 5.0, inches: 7.0 };
        assert!(validate_feet_inches(height, UnitSystem::Metric).is_err());
    }
}
