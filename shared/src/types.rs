//! API request and response types

use crate::bmi::{BmiCategory, Recommendations};
use crate::body_type::{BodyType, BodyTypeProfile, BodyTypeScores};
use crate::units::{FeetInchesHeight, UnitSystem};
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// BMI
// ============================================================================

/// Height as submitted: a single number, or feet and inches (imperial only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeightInput {
    Value(f64),
    FeetInches(FeetInchesHeight),
}

/// BMI calculation request
///
/// Missing fields are allowed and produce a response without a BMI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BmiRequest {
    #[serde(default)]
    pub height: Option<HeightInput>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub unit_system: UnitSystem,
}

/// BMI calculation response
#[derive(Debug, Clone, Serialize)]
pub struct BmiResponse {
    /// Unrounded BMI, `null` until both height and weight are given
    pub bmi: Option<f64>,
    /// BMI rounded to one decimal for display
    pub bmi_rounded: Option<f64>,
    pub category: Option<BmiCategory>,
    pub unit_system: UnitSystem,
    pub height_unit: &'static str,
    pub weight_unit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Recommendations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<&'static str>,
}

/// One row of the BMI category table
#[derive(Debug, Clone, Serialize)]
pub struct BmiCategoryInfo {
    pub category: BmiCategory,
    pub label: &'static str,
    pub min: f64,
    /// `null` for the open-ended top category
    pub max: Option<f64>,
    pub range_label: &'static str,
}

impl From<BmiCategory> for BmiCategoryInfo {
    fn from(category: BmiCategory) -> Self {
        let (min, max) = category.range();
        Self {
            category,
            label: category.label(),
            min,
            max: max.is_finite().then_some(max),
            range_label: category.range_label(),
        }
    }
}

// ============================================================================
// Body Type
// ============================================================================

/// Body-type quiz result
#[derive(Debug, Clone, Serialize)]
pub struct BodyTypeResponse {
    pub body_type: BodyType,
    pub scores: BodyTypeScores,
    pub profile: BodyTypeProfile,
}

impl From<BodyTypeScores> for BodyTypeResponse {
    fn from(scores: BodyTypeScores) -> Self {
        let body_type = scores.dominant();
        Self {
            body_type,
            scores,
            profile: body_type.profile(),
        }
    }
}

/// Body type with its profile, for listing all types
#[derive(Debug, Clone, Serialize)]
pub struct BodyTypeInfo {
    pub body_type: BodyType,
    pub profile: BodyTypeProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_input_number() {
        let req: BmiRequest =
            serde_json::from_str(r#"{"height": 170, "weight": 70, "unit_system": "metric"}"#).unwrap();
        assert_eq!(req.height, Some(HeightInput::Value(170.0)));
        assert_eq!(req.weight, Some(70.0));
        assert_eq!(req.unit_system, UnitSystem::Metric);
    }

    #[test]
    fn test_height_input_feet_inches() {
        let req: BmiRequest = serde_json::from_str(
            r#"{"height": {"feet": 5, "inches": 7}, "weight": 154, "unit_system": "imperial"}"#,
        )
        .unwrap();
        assert_eq!(
            req.height,
            Some(HeightInput::FeetInches(FeetInchesHeight { feet: 5.0, inches: 7.0 }))
        );
    }

    #[test]
    fn test_empty_request_defaults() {
        let req: BmiRequest = serde_json::from_str("{}").unwrap();
        assert!(req.height.is_none());
        assert!(req.weight.is_none());
        assert_eq!(req.unit_system, UnitSystem::Metric);
    }

    #[test]
    fn test_open_ended_category_has_no_max() {
        let info = BmiCategoryInfo::from(BmiCategory::Obese);
        assert_eq!(info.min, 30.0);
        assert_eq!(info.max, None);

        let info = BmiCategoryInfo::from(BmiCategory::Normal);
        assert_eq!(info.max, Some(25.0));
    }

    #[test]
    fn test_body_type_response_from_scores() {
        let scores = BodyTypeScores { ectomorph: 2, mesomorph: 4, endomorph: 0 };
        let response = BodyTypeResponse::from(scores);
        assert_eq!(response.body_type, BodyType::Mesomorph);
        assert_eq!(response.profile.title, "Mesomorph");
    }
}
