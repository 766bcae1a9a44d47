//! Exchange rate snapshot for one base currency on one day.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use forex_currencies::CurrencyCode;

/// Calendar day of a rate snapshot, serialized as `YYYY-MM-DD`.
///
/// Ordering matches the lexicographic ordering of the zero-padded string.
pub type RateDate = chrono::NaiveDate;

/// Wire and storage format for [`RateDate`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Conversion rates from `base` into other currencies on `date`.
///
/// Records are read-only for the API: filtering derives a new record and
/// never touches the stored one. `rates` may contain codes outside the
/// catalog and may or may not contain `base` itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExchangeRateRecord {
    pub base: CurrencyCode,
    #[schema(value_type = String, format = Date, example = "2025-11-21")]
    pub date: RateDate,
    #[schema(example = json!({"USD": 1.08, "GBP": 0.86}))]
    pub rates: BTreeMap<String, f64>,
}

impl ExchangeRateRecord {
    pub fn new(base: CurrencyCode, date: RateDate, rates: BTreeMap<String, f64>) -> Self {
        Self { base, date, rates }
    }

    /// Document key under which the record is stored, e.g. `EUR-2025-11-21`.
    pub fn document_id(&self) -> String {
        format!("{}-{}", self.base, self.date.format(DATE_FORMAT))
    }

    /// Returns a copy keeping only the requested symbols that this record
    /// actually carries. Symbols missing from `rates` are skipped silently.
    ///
    /// An empty `symbols` slice yields an empty `rates` map; deciding whether
    /// to filter at all is the caller's concern.
    pub fn with_symbols(&self, symbols: &[CurrencyCode]) -> Self {
        let rates = symbols
            .iter()
            .filter_map(|symbol| {
                self.rates
                    .get(symbol.code())
                    .map(|rate| (symbol.code().to_string(), *rate))
            })
            .collect();

        Self {
            base: self.base,
            date: self.date,
            rates,
        }
    }
}

/// Parses a `YYYY-MM-DD` string into a [`RateDate`].
pub fn parse_rate_date(raw: &str) -> Result<RateDate, chrono::ParseError> {
    RateDate::parse_from_str(raw, DATE_FORMAT)
}
