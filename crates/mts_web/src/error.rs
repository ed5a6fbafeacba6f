use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::page::ErrorPage;

const FALLBACK_ERROR_PAGE: &str = "<h1>Something went wrong</h1>";

/// Failures on the HTML surface. All of them end up as the same generic page.
#[derive(Error, Debug)]
pub enum WebError {
    #[error(transparent)]
    Pipeline(#[from] mts_core::Error),

    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        let body = ErrorPage
            .render()
            .unwrap_or_else(|_| FALLBACK_ERROR_PAGE.to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}

/// Failures on the JSON API.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] pub mts_core::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("API request failed: {}", self.0);
        let status = match self.0 {
            mts_core::Error::InvalidLanguage(_) | mts_core::Error::Config(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
