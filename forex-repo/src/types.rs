//! Row mapping shared by the SQL adapters.
//!
//! Both backends store a record as one `exchange_rates` row whose `rates`
//! column holds the JSON object of the document.

use std::collections::BTreeMap;

use sqlx::FromRow;

use forex_types::{
    CurrencyCode, DATE_FORMAT, ExchangeRateRecord, RepoError, parse_rate_date,
};

/// Exchange rate row from database.
#[derive(Debug, FromRow)]
pub struct DbExchangeRate {
    pub base: String,
    pub date: String,
    pub rates: String,
}

impl DbExchangeRate {
    /// Converts a stored row back into a domain record.
    pub fn into_domain(self) -> Result<ExchangeRateRecord, RepoError> {
        let base: CurrencyCode = self
            .base
            .parse()
            .map_err(|e: forex_types::UnknownCurrency| RepoError::Decode(e.to_string()))?;

        let date = parse_rate_date(&self.date)
            .map_err(|e| RepoError::Decode(format!("Invalid date {:?}: {}", self.date, e)))?;

        let rates: BTreeMap<String, f64> = serde_json::from_str(&self.rates)
            .map_err(|e| RepoError::Decode(format!("Invalid rates document: {}", e)))?;

        Ok(ExchangeRateRecord::new(base, date, rates))
    }

    /// Flattens a domain record into its column values.
    pub fn from_domain(record: &ExchangeRateRecord) -> Result<Self, RepoError> {
        let rates =
            serde_json::to_string(&record.rates).map_err(|e| RepoError::Decode(e.to_string()))?;

        Ok(Self {
            base: record.base.code().to_string(),
            date: record.date.format(DATE_FORMAT).to_string(),
            rates,
        })
    }
}
