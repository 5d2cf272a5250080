//! BMI service
//!
//! Validates submitted measurements and runs them through the BMI engine.
//! Missing fields are not an error: the response simply carries no BMI,
//! matching a form that has not been filled in yet.

use crate::error::ApiError;
use bmi_calculator_shared::bmi::DISCLAIMER;
use bmi_calculator_shared::types::{BmiCategoryInfo, BmiRequest, BmiResponse, HeightInput};
use bmi_calculator_shared::validation::{validate_feet_inches, validate_height, validate_weight};
use bmi_calculator_shared::{BmiCategory, BmiMeasurement, UnitSystem};

pub struct BmiService;

impl BmiService {
    /// Validate a request and calculate its BMI and category
    pub fn assess(request: &BmiRequest) -> Result<BmiResponse, ApiError> {
        let measurement = Self::measurement(request)?;
        Ok(Self::respond(&measurement))
    }

    /// Convert a request into a validated measurement
    pub fn measurement(request: &BmiRequest) -> Result<BmiMeasurement, ApiError> {
        let unit_system = request.unit_system;

        let height = request
            .height
            .map(|input| Self::resolve_height(input, unit_system))
            .transpose()?;

        let weight = request
            .weight
            .map(|weight| {
                validate_weight(weight)
                    .map(|_| weight)
                    .map_err(|msg| ApiError::invalid_field("weight", msg))
            })
            .transpose()?;

        Ok(BmiMeasurement {
            height,
            weight,
            unit_system,
        })
    }

    fn resolve_height(input: HeightInput, unit_system: UnitSystem) -> Result<f64, ApiError> {
        let height = match input {
            HeightInput::Value(height) => height,
            HeightInput::FeetInches(feet_inches) => validate_feet_inches(feet_inches, unit_system)
                .map_err(|msg| ApiError::invalid_field("height", msg))?,
        };
        validate_height(height).map_err(|msg| ApiError::invalid_field("height", msg))?;
        Ok(height)
    }

    /// Build the response for a measurement
    pub fn respond(measurement: &BmiMeasurement) -> BmiResponse {
        let unit_system = measurement.unit_system;
        let bmi = measurement.bmi();
        let category = measurement.category();

        BmiResponse {
            bmi,
            bmi_rounded: bmi.map(round_to_tenth),
            category,
            unit_system,
            height_unit: unit_system.height_unit(),
            weight_unit: unit_system.weight_unit(),
            recommendations: category.map(|c| c.recommendations()),
            disclaimer: category.map(|_| DISCLAIMER),
        }
    }

    /// Category table, lowest BMI first
    pub fn categories() -> Vec<BmiCategoryInfo> {
        BmiCategory::ALL.into_iter().map(BmiCategoryInfo::from).collect()
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_calculator_shared::{classify_bmi, compute_bmi, FeetInchesHeight};
    use proptest::prelude::*;
    use rstest::rstest;

    fn request(height: Option<HeightInput>, weight: Option<f64>, unit_system: UnitSystem) -> BmiRequest {
        BmiRequest {
            height,
            weight,
            unit_system,
        }
    }

    #[test]
    fn test_assess_metric() {
        let req = request(Some(HeightInput::Value(170.0)), Some(70.0), UnitSystem::Metric);
        let response = BmiService::assess(&req).unwrap();
        assert_eq!(response.bmi_rounded, Some(24.2));
        assert_eq!(response.category, Some(BmiCategory::Normal));
        assert_eq!(response.height_unit, "cm");
        assert!(response.recommendations.is_some());
        assert!(response.disclaimer.is_some());
    }

    #[test]
    fn test_assess_feet_inches_matches_total_inches() {
        let feet_inches = request(
            Some(HeightInput::FeetInches(FeetInchesHeight { feet: 5.0, inches: 7.0 })),
            Some(154.0),
            UnitSystem::Imperial,
        );
        let inches = request(Some(HeightInput::Value(67.0)), Some(154.0), UnitSystem::Imperial);

        let a = BmiService::assess(&feet_inches).unwrap();
        let b = BmiService::assess(&inches).unwrap();
        assert_eq!(a.bmi, b.bmi);
        assert_eq!(a.bmi_rounded, Some(24.1));
        assert_eq!(a.weight_unit, "lbs");
    }

    #[test]
    fn test_assess_incomplete_has_no_bmi() {
        let req = request(Some(HeightInput::Value(170.0)), None, UnitSystem::Metric);
        let response = BmiService::assess(&req).unwrap();
        assert_eq!(response.bmi, None);
        assert_eq!(response.category, None);
        assert!(response.recommendations.is_none());
    }

    #[rstest]
    #[case(Some(HeightInput::Value(0.0)), Some(70.0), "height")]
    #[case(Some(HeightInput::Value(301.0)), Some(70.0), "height")]
    #[case(Some(HeightInput::Value(170.0)), Some(-1.0), "weight")]
    #[case(Some(HeightInput::Value(170.0)), Some(501.0), "weight")]
    #[case(
        Some(HeightInput::FeetInches(FeetInchesHeight { feet: 5.0, inches: 7.0 })),
        Some(70.0),
        "height"
    )]
    fn test_assess_rejects_invalid(
        #[case] height: Option<HeightInput>,
        #[case] weight: Option<f64>,
        #[case] expected_field: &str,
    ) {
        // Metric unit system: feet/inches entry is rejected too
        let req = request(height, weight, UnitSystem::Metric);
        match BmiService::assess(&req) {
            Err(ApiError::Validation { field, .. }) => {
                assert_eq!(field.as_deref(), Some(expected_field));
            }
            other => panic!("expected validation error, got {:?}", other.map(|r| r.bmi)),
        }
    }

    #[test]
    fn test_categories_in_order() {
        let categories = BmiService::categories();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0].category, BmiCategory::Underweight);
        assert_eq!(categories[3].max, None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: any in-range request gets the engine's BMI and category
        #[test]
        fn prop_valid_request_matches_engine(
            height in 50.0f64..300.0,
            weight in 1.0f64..500.0,
            imperial in any::<bool>()
        ) {
            let unit_system = UnitSystem::from_is_metric(!imperial);
            let req = request(Some(HeightInput::Value(height)), Some(weight), unit_system);
            let response = BmiService::assess(&req).unwrap();

            let expected = compute_bmi(height, weight, unit_system);
            prop_assert_eq!(response.bmi, expected);
            prop_assert_eq!(response.category, expected.map(classify_bmi));
        }
    }
}
