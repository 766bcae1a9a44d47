//! # Forex Hex
//!
//! Rates lookup service and HTTP adapter for the forex API.
//!
//! ## Architecture
//!
//! - `service/` - Rates lookup service (input normalization and symbol filtering)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served by the adapter
//!
//! The service is generic over `R: RatesRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::{RatesService, normalize_base, symbols_filter};
