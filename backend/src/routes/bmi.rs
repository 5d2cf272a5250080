//! BMI calculation API routes

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::services::BmiService;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use bmi_calculator_shared::types::{BmiCategoryInfo, BmiRequest, BmiResponse};
use tracing::debug;

/// Create BMI routes
pub fn bmi_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(calculate_bmi))
        .route("/categories", get(list_categories))
}

/// POST /api/v1/bmi - Calculate BMI and category
///
/// Height and weight are taken in the units of `unit_system` (metric when
/// omitted). Imperial height may be given as `{"feet": 5, "inches": 7}`.
/// A request missing either value returns `bmi: null` rather than an error.
async fn calculate_bmi(ApiJson(req): ApiJson<BmiRequest>) -> Result<Json<BmiResponse>, ApiError> {
    let response = BmiService::assess(&req)?;

    debug!(
        unit_system = %response.unit_system,
        bmi = ?response.bmi,
        category = ?response.category,
        "Calculated BMI"
    );

    Ok(Json(response))
}

/// GET /api/v1/bmi/categories - BMI category table
async fn list_categories() -> Json<Vec<BmiCategoryInfo>> {
    Json(BmiService::categories())
}
