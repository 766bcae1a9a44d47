//! In-memory repository adapter.
//!
//! Backs `memory://` URLs and the HTTP tests. Records are indexed by base and
//! date, so the latest record for a base is the last entry of its map.

use std::collections::BTreeMap;

use async_trait::async_trait;
use dashmap::DashMap;

use forex_types::{CurrencyCode, ExchangeRateRecord, RateDate, RatesRepository, RepoError};

/// Concurrent in-memory store of exchange rate records.
#[derive(Default)]
pub struct InMemoryRepo {
    records: DashMap<CurrencyCode, BTreeMap<RateDate, ExchangeRateRecord>>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = ExchangeRateRecord>) -> Self {
        let repo = Self::new();
        for record in records {
            repo.upsert_record(record);
        }
        repo
    }

    /// Inserts a record, replacing any stored record with the same base and date.
    pub fn upsert_record(&self, record: ExchangeRateRecord) {
        self.records
            .entry(record.base)
            .or_default()
            .insert(record.date, record);
    }

    /// Total number of stored records.
    pub fn len(&self) -> usize {
        self.records.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored record.
    pub fn clear(&self) {
        self.records.clear();
    }
}

#[async_trait]
impl RatesRepository for InMemoryRepo {
    async fn latest_rate(
        &self,
        base: CurrencyCode,
    ) -> Result<Option<ExchangeRateRecord>, RepoError> {
        Ok(self
            .records
            .get(&base)
            .and_then(|by_date| by_date.values().next_back().cloned()))
    }
}
