//! Rates Lookup Service
//!
//! Turns raw `base` and `symbols` query values into a repository lookup and
//! shapes the result. Contains NO infrastructure logic.
//!
//! Bad input is never rejected: an unknown or empty base falls back to EUR,
//! and unknown symbols are dropped. There is no validation-error path.

use std::time::Duration;

use forex_types::{CurrencyCode, DEFAULT_BASE, ExchangeRateRecord, RatesRepository, RepoError};

/// Application service for rate lookups.
///
/// Generic over `R: RatesRepository` - the adapter is injected at compile time.
/// The service holds no mutable state, so one instance serves every request.
pub struct RatesService<R: RatesRepository> {
    repo: R,
    fetch_timeout: Option<Duration>,
}

impl<R: RatesRepository> RatesService<R> {
    /// Creates a new rates service with the given repository and no fetch bound.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            fetch_timeout: None,
        }
    }

    /// Bounds every repository fetch; expiry is reported as [`RepoError::Timeout`].
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Latest record for `raw_base`, optionally narrowed to `raw_symbols`.
    ///
    /// `Ok(None)` means nothing is stored for the normalized base.
    /// Repository errors are returned unchanged.
    pub async fn get_latest_rate(
        &self,
        raw_base: &str,
        raw_symbols: &str,
    ) -> Result<Option<ExchangeRateRecord>, RepoError> {
        let base = normalize_base(raw_base);

        let Some(record) = self.fetch_latest(base).await? else {
            tracing::debug!(%base, "No rates stored for base");
            return Ok(None);
        };

        let symbols = symbols_filter(raw_symbols, base);
        if symbols.is_empty() {
            return Ok(Some(record));
        }

        tracing::debug!(%base, symbols = symbols.len(), "Filtering rates by symbols");
        Ok(Some(record.with_symbols(&symbols)))
    }

    async fn fetch_latest(
        &self,
        base: CurrencyCode,
    ) -> Result<Option<ExchangeRateRecord>, RepoError> {
        match self.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, self.repo.latest_rate(base))
                .await
                .map_err(|_| RepoError::Timeout(limit))?,
            None => self.repo.latest_rate(base).await,
        }
    }
}

/// Trims and uppercases `raw`; anything outside the catalog becomes EUR.
pub fn normalize_base(raw: &str) -> CurrencyCode {
    raw.trim().to_uppercase().parse().unwrap_or(DEFAULT_BASE)
}

/// Parses a comma separated symbol list.
///
/// Items are trimmed and uppercased; items outside the catalog and items equal
/// to `base` are dropped. Input order is kept and duplicates are not removed.
pub fn symbols_filter(raw: &str, base: CurrencyCode) -> Vec<CurrencyCode> {
    let symbols = raw.trim().to_uppercase();
    if symbols.is_empty() {
        return Vec::new();
    }

    symbols
        .split(',')
        .filter_map(|item| item.trim().parse::<CurrencyCode>().ok())
        .filter(|symbol| *symbol != base)
        .collect()
}
