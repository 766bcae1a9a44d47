//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use axum::Json;
use utoipa::OpenApi;

use forex_types::{CurrencyCode, ErrorResponse, ExchangeRateRecord, LatestRatesQuery};

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Latest exchange rates for a base currency
///
/// An unknown or missing `base` falls back to EUR. Unknown symbols, and the
/// base itself, are ignored; when no usable symbol remains the full record
/// is returned.
#[utoipa::path(
    get,
    path = "/v1/rates/latest",
    tag = "rates",
    params(LatestRatesQuery),
    responses(
        (status = 200, description = "Latest stored rates", body = ExchangeRateRecord),
        (status = 404, description = "No rates stored for the base", body = ErrorResponse,
            example = json!({"message": "Rates not found", "status": 404})),
        (status = 500, description = "Storage failure", body = ErrorResponse,
            example = json!({"message": "Internal server error", "status": 500}))
    )
)]
async fn get_latest() {}

/// OpenAPI documentation for the Forex API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forex API",
        version = "1.0.0",
        description = "Latest foreign-exchange rates per base currency, optionally filtered to a set of target currencies.",
        license(name = "MIT"),
    ),
    paths(health, get_latest),
    components(schemas(ExchangeRateRecord, ErrorResponse, CurrencyCode)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "rates", description = "Exchange rate lookups"),
    )
)]
pub struct ApiDoc;

/// Serves the generated document as JSON.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
