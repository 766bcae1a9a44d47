//! RatesService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use forex_types::{
        CurrencyCode, ExchangeRateRecord, RatesRepository, RepoError, parse_rate_date,
    };

    use crate::{RatesService, normalize_base, symbols_filter};

    /// Simple in-memory repository that also records which bases were requested.
    pub struct MockRepo {
        records: Vec<ExchangeRateRecord>,
        requested: Mutex<Vec<CurrencyCode>>,
    }

    impl MockRepo {
        pub fn new(records: Vec<ExchangeRateRecord>) -> Self {
            Self {
                records,
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<CurrencyCode> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RatesRepository for MockRepo {
        async fn latest_rate(
            &self,
            base: CurrencyCode,
        ) -> Result<Option<ExchangeRateRecord>, RepoError> {
            self.requested.lock().unwrap().push(base);
            Ok(self
                .records
                .iter()
                .filter(|r| r.base == base)
                .max_by_key(|r| r.date)
                .cloned())
        }
    }

    /// Repository whose storage is always down.
    struct FailingRepo;

    #[async_trait]
    impl RatesRepository for FailingRepo {
        async fn latest_rate(
            &self,
            _base: CurrencyCode,
        ) -> Result<Option<ExchangeRateRecord>, RepoError> {
            Err(RepoError::Database("storage unavailable".into()))
        }
    }

    /// Repository that never answers in time.
    struct SlowRepo;

    #[async_trait]
    impl RatesRepository for SlowRepo {
        async fn latest_rate(
            &self,
            _base: CurrencyCode,
        ) -> Result<Option<ExchangeRateRecord>, RepoError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(None)
        }
    }

    fn record(base: CurrencyCode, date: &str, rates: &[(&str, f64)]) -> ExchangeRateRecord {
        ExchangeRateRecord::new(
            base,
            parse_rate_date(date).unwrap(),
            rates
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        )
    }

    fn eur_full() -> ExchangeRateRecord {
        record(
            CurrencyCode::EUR,
            "2025-11-21",
            &[("USD", 1.08), ("GBP", 0.86), ("JPY", 161.5), ("CHF", 0.93)],
        )
    }

    fn rates(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs
            .iter()
            .map(|(code, rate)| (code.to_string(), *rate))
            .collect()
    }

    const ODD_INPUTS: &[&str] = &[
        "",
        " ",
        "usd",
        " usd ",
        "USD",
        "Eur",
        "NOTACURRENCY",
        "US D",
        "jpy\t",
        "€",
        "ß",
        "gbp,usd",
        "INVALID",
        "\u{00a0}CHF\u{00a0}",
    ];

    // ─────────────────────────────────────────────────────────────────────────
    // Base normalization properties
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_normalize_base_is_total() {
        for input in ODD_INPUTS {
            let base = normalize_base(input);
            assert!(CurrencyCode::all().contains(&base), "{input:?}");
        }
    }

    #[test]
    fn test_normalize_base_is_idempotent() {
        for input in ODD_INPUTS {
            let once = normalize_base(input);
            assert_eq!(normalize_base(once.code()), once, "{input:?}");
        }
    }

    #[test]
    fn test_normalize_base_case_and_whitespace_insensitive() {
        assert_eq!(normalize_base(" usd "), normalize_base("USD"));
        assert_eq!(normalize_base("USD"), CurrencyCode::USD);
    }

    #[test]
    fn test_normalize_base_default_fallback() {
        assert_eq!(normalize_base(""), CurrencyCode::EUR);
        assert_eq!(normalize_base("NOTACURRENCY"), CurrencyCode::EUR);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Symbol filter properties
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_symbols_filter_never_contains_base() {
        for base in CurrencyCode::all() {
            let raw = format!("{},usd,{},gbp", base, base.code().to_lowercase());
            let symbols = symbols_filter(&raw, *base);
            assert!(!symbols.contains(base), "{raw}");
        }
    }

    #[tokio::test]
    async fn test_filtered_rates_are_subset_of_request_catalog_and_source() {
        let service = RatesService::new(MockRepo::new(vec![eur_full()]));
        let requested = "usd, gbp, zar, XXX, eur";

        let filtered = service
            .get_latest_rate("EUR", requested)
            .await
            .unwrap()
            .unwrap();

        let source = eur_full();
        for key in filtered.rates.keys() {
            assert!(requested.to_uppercase().contains(key.as_str()));
            assert!(forex_types::is_known(key));
            assert!(source.rates.contains_key(key));
        }
        assert_eq!(filtered.rates, rates(&[("USD", 1.08), ("GBP", 0.86)]));
    }

    #[tokio::test]
    async fn test_empty_filter_passes_record_through() {
        let service = RatesService::new(MockRepo::new(vec![eur_full()]));

        for raw in ["", "   ", "XXX,YYY", "eur", ",,"] {
            let result = service.get_latest_rate("EUR", raw).await.unwrap().unwrap();
            assert_eq!(result, eur_full(), "{raw:?}");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scenarios
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_latest_of_several_dates_is_returned() {
        let service = RatesService::new(MockRepo::new(vec![
            record(CurrencyCode::EUR, "2025-11-20", &[("USD", 1.07)]),
            record(CurrencyCode::EUR, "2025-11-21", &[("USD", 1.08)]),
        ]));

        let result = service.get_latest_rate("EUR", "").await.unwrap().unwrap();

        assert_eq!(result.date, parse_rate_date("2025-11-21").unwrap());
        assert_eq!(result.rates, rates(&[("USD", 1.08)]));
    }

    #[tokio::test]
    async fn test_symbols_narrow_the_rates() {
        let service = RatesService::new(MockRepo::new(vec![eur_full()]));

        let result = service
            .get_latest_rate("EUR", "USD,GBP")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.base, CurrencyCode::EUR);
        assert_eq!(result.date, parse_rate_date("2025-11-21").unwrap());
        assert_eq!(result.rates, rates(&[("USD", 1.08), ("GBP", 0.86)]));
        assert!(!result.rates.contains_key("JPY"));
        assert!(!result.rates.contains_key("CHF"));
    }

    #[tokio::test]
    async fn test_invalid_base_behaves_like_eur() {
        let repo = MockRepo::new(vec![
            eur_full(),
            record(CurrencyCode::USD, "2025-11-21", &[("EUR", 0.926)]),
        ]);
        let service = RatesService::new(repo);

        let invalid = service.get_latest_rate("INVALID", "usd").await.unwrap();
        let eur = service.get_latest_rate("EUR", "usd").await.unwrap();

        assert_eq!(invalid, eur);
        assert_eq!(
            service.repo().requested(),
            vec![CurrencyCode::EUR, CurrencyCode::EUR]
        );
    }

    #[tokio::test]
    async fn test_base_is_normalized_before_fetch() {
        let service = RatesService::new(MockRepo::new(vec![record(
            CurrencyCode::USD,
            "2025-11-21",
            &[("EUR", 0.926), ("GBP", 0.796), ("JPY", 149.5)],
        )]));

        let result = service.get_latest_rate(" usd ", "").await.unwrap().unwrap();

        assert_eq!(result.base, CurrencyCode::USD);
        assert_eq!(service.repo().requested(), vec![CurrencyCode::USD]);
    }

    #[tokio::test]
    async fn test_missing_record_is_absence() {
        let service = RatesService::new(MockRepo::new(vec![eur_full()]));

        let result = service.get_latest_rate("JPY", "USD").await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_repository_error_is_propagated() {
        let service = RatesService::new(FailingRepo);

        let result = service.get_latest_rate("EUR", "USD").await;

        match result {
            Err(RepoError::Database(msg)) => assert_eq!(msg, "storage unavailable"),
            other => panic!("expected database error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_symbol_equal_to_base_yields_full_record() {
        let service = RatesService::new(MockRepo::new(vec![eur_full()]));

        let result = service.get_latest_rate("EUR", "EUR").await.unwrap().unwrap();

        assert_eq!(result, eur_full());
    }

    #[tokio::test]
    async fn test_requested_symbol_absent_from_data_is_omitted() {
        let service = RatesService::new(MockRepo::new(vec![eur_full()]));

        let result = service
            .get_latest_rate("EUR", "ZAR")
            .await
            .unwrap()
            .unwrap();

        assert!(result.rates.is_empty());
        assert_eq!(result.base, CurrencyCode::EUR);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fetch bound
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_slow_repository_times_out() {
        let service = RatesService::new(SlowRepo).with_fetch_timeout(Duration::from_millis(20));

        let result = service.get_latest_rate("EUR", "").await;

        assert!(matches!(result, Err(RepoError::Timeout(d)) if d == Duration::from_millis(20)));
    }

    #[tokio::test]
    async fn test_fast_repository_within_timeout() {
        let service = RatesService::new(MockRepo::new(vec![eur_full()]))
            .with_fetch_timeout(Duration::from_secs(5));

        let result = service.get_latest_rate("EUR", "").await.unwrap();

        assert_eq!(result, Some(eur_full()));
    }
}
