//! # Forex Client SDK
//!
//! A typed Rust client for the Forex API.

use forex_types::{ErrorResponse, ExchangeRateRecord};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// True when the API answered 404, i.e. no rates are stored for the base.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}

/// Forex API client.
pub struct ForexClient {
    base_url: String,
    http: Client,
}

impl ForexClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Fetches the latest rates for `base`, narrowed to `symbols` when given.
    ///
    /// Both values are sent as-is; the server normalizes them.
    pub async fn latest(
        &self,
        base: Option<&str>,
        symbols: &[&str],
    ) -> Result<ExchangeRateRecord, ClientError> {
        let query = latest_query(base, symbols);
        let resp = self
            .http
            .get(format!("{}/v1/rates/latest", self.base_url))
            .query(&query)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|err| err.message)
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Query pairs for `/v1/rates/latest`; empty inputs are left out.
fn latest_query(base: Option<&str>, symbols: &[&str]) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(base) = base.filter(|b| !b.is_empty()) {
        query.push(("base", base.to_string()));
    }
    if !symbols.is_empty() {
        query.push(("symbols", symbols.join(",")));
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ForexClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = ForexClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_latest_query_empty() {
        assert!(latest_query(None, &[]).is_empty());
        assert!(latest_query(Some(""), &[]).is_empty());
    }

    #[test]
    fn test_latest_query_with_base_and_symbols() {
        assert_eq!(
            latest_query(Some("USD"), &["GBP", "JPY"]),
            vec![("base", "USD".to_string()), ("symbols", "GBP,JPY".to_string())]
        );
    }

    #[test]
    fn test_is_not_found() {
        let err = ClientError::Api {
            status: 404,
            message: "Rates not found".into(),
        };
        assert!(err.is_not_found());

        let err = ClientError::Api {
            status: 500,
            message: "Internal server error".into(),
        };
        assert!(!err.is_not_found());
    }
}
