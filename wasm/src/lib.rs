//! BMI Calculator WASM Module
//!
//! This crate provides WebAssembly bindings so the calculator form can run
//! the calculation core directly in the browser.

use bmi_calculator_shared::types::BodyTypeResponse;
use bmi_calculator_shared::validation::validate_feet_inches;
use bmi_calculator_shared::{
    bmi as engine, score_answers, CalcError, FeetInchesHeight, QuizAnswers, UnitSystem,
};
use wasm_bindgen::prelude::*;

/// Calculate BMI, `undefined` while height or weight is missing
#[wasm_bindgen]
pub fn compute_bmi(height: f64, weight: f64, is_metric: bool) -> Option<f64> {
    engine::compute_bmi(height, weight, UnitSystem::from_is_metric(is_metric))
}

/// Category name for a BMI value
#[wasm_bindgen]
pub fn classify_bmi(bmi: f64) -> String {
    engine::classify_bmi(bmi).to_string()
}

/// Recommendations for the category of a BMI value, as JSON
#[wasm_bindgen]
pub fn bmi_recommendations(bmi: f64) -> Result<String, JsError> {
    Ok(recommendations_json(bmi)?)
}

/// Lowercase body type name for the quiz answers
#[wasm_bindgen]
pub fn determine_body_type(shoulders: &str, waist: &str, weight_gain: &str) -> Result<String, JsError> {
    let answers = QuizAnswers::parse(shoulders, waist, weight_gain)?;
    Ok(body_type_name(&answers))
}

/// Body type, scores and profile for the quiz answers, as JSON
#[wasm_bindgen]
pub fn body_type_result(shoulders: &str, waist: &str, weight_gain: &str) -> Result<String, JsError> {
    let answers = QuizAnswers::parse(shoulders, waist, weight_gain)?;
    Ok(body_type_json(&answers)?)
}

/// Total inches of a feet/inches height entry
#[wasm_bindgen]
pub fn feet_inches_to_inches(feet: f64, inches: f64) -> Result<f64, JsError> {
    Ok(total_inches(feet, inches)?)
}

fn recommendations_json(bmi: f64) -> Result<String, serde_json::Error> {
    serde_json::to_string(&engine::classify_bmi(bmi).recommendations())
}

fn body_type_name(answers: &QuizAnswers) -> String {
    bmi_calculator_shared::determine_body_type(answers)
        .title()
        .to_lowercase()
}

fn body_type_json(answers: &QuizAnswers) -> Result<String, serde_json::Error> {
    serde_json::to_string(&BodyTypeResponse::from(score_answers(answers)))
}

fn total_inches(feet: f64, inches: f64) -> Result<f64, CalcError> {
    validate_feet_inches(FeetInchesHeight { feet, inches }, UnitSystem::Imperial)
        .map_err(CalcError::Validation)
}
