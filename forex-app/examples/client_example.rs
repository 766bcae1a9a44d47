//! Client example demonstrating rate lookups against a running server.
//!
//! Run with: cargo run -p forex-app --example client_example

use std::collections::BTreeMap;
use std::net::SocketAddr;

use forex_client::ForexClient;
use forex_hex::{RatesService, inbound::HttpServer};
use forex_repo::build_repo;
use forex_types::{CurrencyCode, ExchangeRateRecord, parse_rate_date};
use tempfile::tempdir;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let port = addr.port();
    drop(listener);

    // Use a temp file-backed SQLite DB
    let tmp = tempdir()?;
    let db_path = tmp.path().join("forex.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    println!("Starting server on port {port}...");
    println!("   Database: {db_url}");

    let repo = build_repo(&db_url).await?;

    // Seed two days of EUR rates and one day of USD rates
    let seed = [
        (CurrencyCode::EUR, "2025-11-20", vec![("USD", 1.07), ("GBP", 0.85)]),
        (
            CurrencyCode::EUR,
            "2025-11-21",
            vec![("USD", 1.08), ("GBP", 0.86), ("JPY", 161.5), ("CHF", 0.93)],
        ),
        (CurrencyCode::USD, "2025-11-21", vec![("EUR", 0.926), ("GBP", 0.796)]),
    ];
    for (base, date, rates) in seed {
        let rates: BTreeMap<String, f64> = rates
            .into_iter()
            .map(|(code, rate)| (code.to_string(), rate))
            .collect();
        repo.upsert_record(ExchangeRateRecord::new(base, parse_rate_date(date)?, rates))
            .await?;
    }

    // Start server in background
    let router = HttpServer::new(RatesService::new(repo)).router();
    let server_addr = format!("127.0.0.1:{port}");
    let server_listener = TcpListener::bind(&server_addr).await?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(server_listener, router.into_make_service()).await {
            eprintln!("server error: {e}");
        }
    });

    let client = ForexClient::new(format!("http://127.0.0.1:{port}"));
    println!("Healthy: {}", client.health().await?);

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: lookups
    // ─────────────────────────────────────────────────────────────────────────

    println!("\n1. Latest rates, default base:");
    let latest = client.latest(None, &[]).await?;
    println!("   {} on {}: {:?}", latest.base, latest.date, latest.rates);

    println!("\n2. Latest EUR rates for USD and GBP only:");
    let filtered = client.latest(Some("eur"), &["usd", "gbp"]).await?;
    println!("   {:?}", filtered.rates);

    println!("\n3. Unknown base falls back to EUR:");
    let fallback = client.latest(Some("NOTACURRENCY"), &[]).await?;
    println!("   base = {}", fallback.base);

    println!("\n4. Base without data:");
    match client.latest(Some("JPY"), &[]).await {
        Ok(record) => println!("   unexpected record: {:?}", record),
        Err(e) => println!("   {e}"),
    }

    Ok(())
}
