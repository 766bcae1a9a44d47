//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use forex_types::{AppError, ErrorResponse, LatestRatesQuery, RatesRepository};

use crate::RatesService;

/// Application state shared across handlers.
pub struct AppState<R: RatesRepository> {
    pub service: RatesService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self.0 {
            AppError::Internal(detail) => {
                tracing::error!(code = status.as_u16(), %detail, "Request failed")
            }
            AppError::NotFound(msg) => {
                tracing::info!(code = status.as_u16(), message = %msg, "Request failed")
            }
        }

        let body = ErrorResponse::new(self.0.public_message(), status.as_u16());
        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Latest rates for a base currency, optionally narrowed to some symbols.
#[tracing::instrument(skip(state))]
pub async fn get_latest<R: RatesRepository>(
    State(state): State<Arc<AppState<R>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ApiError> {
    // Repeated keys are not an error: the first value is used.
    let query = LatestRatesQuery::from_pairs(pairs);
    let base = query.base.as_deref().unwrap_or_default();
    let symbols = query.symbols.as_deref().unwrap_or_default();

    let record = state
        .service
        .get_latest_rate(base, symbols)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Rates not found".into()))?;

    Ok(Json(record))
}

/// Fallback for every unrouted path.
pub async fn not_found() -> ApiError {
    ApiError(AppError::NotFound("Not found".into()))
}

/// Fallback for a routed path hit with an unsupported method.
pub async fn method_not_allowed() -> impl IntoResponse {
    let status = StatusCode::METHOD_NOT_ALLOWED;
    (
        status,
        Json(ErrorResponse::new("Method not allowed", status.as_u16())),
    )
}
