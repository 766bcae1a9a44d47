//! # Forex Types
//!
//! Domain types and port traits for the forex API.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (ExchangeRateRecord)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Repository and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{DATE_FORMAT, ExchangeRateRecord, RateDate, parse_rate_date};
pub use dto::*;
pub use error::{AppError, RepoError};
pub use forex_currencies::{CurrencyCode, DEFAULT_BASE, UnknownCurrency, is_known};
pub use ports::RatesRepository;
