//! Repository port trait.
//!
//! This is the only storage seam of the forex API.
//! Adapters (SQLite, Postgres, InMemory) implement this trait.

use forex_currencies::CurrencyCode;

use crate::domain::ExchangeRateRecord;
use crate::error::RepoError;

/// Read access to stored exchange rate records.
///
/// Implementations are shared between concurrent requests and must be safe
/// to call from many tasks at once.
#[async_trait::async_trait]
pub trait RatesRepository: Send + Sync + 'static {
    /// Returns the record with the greatest `date` among those whose `base`
    /// equals `base`, or `None` when no record exists for it.
    ///
    /// Which record wins on equal dates is up to the adapter.
    async fn latest_rate(&self, base: CurrencyCode)
    -> Result<Option<ExchangeRateRecord>, RepoError>;
}
