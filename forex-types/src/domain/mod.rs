//! Domain models for the forex API.

pub mod record;

pub use record::{DATE_FORMAT, ExchangeRateRecord, RateDate, parse_rate_date};
