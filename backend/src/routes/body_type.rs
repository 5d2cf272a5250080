//! Body-type quiz API routes

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::services::BodyTypeService;
use crate::state::AppState;
use axum::{
    extract::Path,
    routing::{get, post},
    Json, Router,
};
use bmi_calculator_shared::body_type::QuizQuestion;
use bmi_calculator_shared::types::{BodyTypeInfo, BodyTypeResponse};
use bmi_calculator_shared::QuizAnswers;
use serde::Deserialize;
use tracing::debug;

/// Create body-type routes
pub fn body_type_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(classify).get(classify_query))
        .route("/questions", get(list_questions))
        .route("/types", get(list_types))
        .route("/types/:name", get(get_type))
}

/// POST /api/v1/body-type - Score quiz answers
async fn classify(ApiJson(answers): ApiJson<QuizAnswers>) -> Json<BodyTypeResponse> {
    let response = BodyTypeService::classify(&answers);

    debug!(
        body_type = %response.body_type,
        ectomorph = response.scores.ectomorph,
        mesomorph = response.scores.mesomorph,
        endomorph = response.scores.endomorph,
        "Classified body type"
    );

    Json(response)
}

/// Quiz answers as query parameters
#[derive(Debug, Deserialize)]
struct QuizQuery {
    shoulders: String,
    waist: String,
    weight_gain: String,
}

/// GET /api/v1/body-type?shoulders=..&waist=..&weight_gain=.. - Score quiz answers
async fn classify_query(ApiQuery(query): ApiQuery<QuizQuery>) -> Result<Json<BodyTypeResponse>, ApiError> {
    let answers = QuizAnswers::parse(&query.shoulders, &query.waist, &query.weight_gain)?;
    Ok(classify(ApiJson(answers)).await)
}

/// GET /api/v1/body-type/questions - Quiz questions and options
async fn list_questions() -> Json<Vec<QuizQuestion>> {
    Json(BodyTypeService::questions())
}

/// GET /api/v1/body-type/types - All body type profiles
async fn list_types() -> Json<Vec<BodyTypeInfo>> {
    Json(BodyTypeService::types())
}

/// GET /api/v1/body-type/types/:name - A single body type profile
async fn get_type(Path(name): Path<String>) -> Result<Json<BodyTypeInfo>, ApiError> {
    Ok(Json(BodyTypeService::find(&name)?))
}
