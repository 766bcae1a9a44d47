//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query string of `GET /v1/rates/latest`.
///
/// Both fields are taken verbatim; normalization happens in the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LatestRatesQuery {
    /// Base currency code. Unknown or missing values fall back to EUR.
    #[param(example = "USD")]
    pub base: Option<String>,
    /// Comma separated target currencies. Unknown codes and the base are ignored.
    #[param(example = "GBP,JPY")]
    pub symbols: Option<String>,
}

impl LatestRatesQuery {
    /// Builds the query from raw pairs; the first occurrence of a key wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "base" => &mut query.base,
                "symbols" => &mut query.symbols,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable message
    #[schema(example = "Rates not found")]
    pub message: String,
    /// HTTP status code, repeated in the body
    #[schema(example = 404)]
    pub status: u16,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}
