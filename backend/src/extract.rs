//! Request extractors

use crate::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON body extractor whose rejections use the API error format
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejections use the API error format
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
