//! # Forex Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize tracing (optionally exporting spans over OTLP)
//! - Initialize the repository adapter
//! - Create the rates service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use forex_hex::{RatesService, inbound::HttpServer};
use forex_repo::{build_repo, enabled_backends};

use config::{Config, LogFormat};

fn init_tracer(
    endpoint: &str,
) -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("forex-api"), provider))
}

/// Installs the global subscriber. Returns the OTLP provider when one was started.
fn init_tracing(config: &Config) -> anyhow::Result<Option<sdktrace::SdkTracerProvider>> {
    let (telemetry, otel_provider) = match config.otlp_endpoint.as_deref() {
        Some(endpoint) => {
            let (tracer, provider) = init_tracer(endpoint)?;
            (
                Some(tracing_opentelemetry::layer().with_tracer(tracer)),
                Some(provider),
            )
        }
        None => (None, None),
    };

    let (text, json) = match config.log_format {
        LogFormat::Text => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,forex_app=debug,forex_hex=debug".into()),
        )
        .with(text)
        .with(json)
        .with(telemetry)
        .init();

    Ok(otel_provider)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let otel_provider = init_tracing(&config)?;

    tracing::info!("Starting forex server on {}", config.server_address);

    // Build repository (handles connection and schema creation)
    let repo = build_repo(&config.database_url).await?;
    tracing::info!(
        compiled = ?enabled_backends(),
        timeout = ?config.repository_timeout,
        "Using {} storage",
        repo.backend()
    );

    let service = RatesService::new(repo).with_fetch_timeout(config.repository_timeout);

    let server = HttpServer::new(service);
    server.run(&config.server_address).await?;

    // Ensure traces are flushed before exit
    if let Some(provider) = otel_provider {
        shutdown_tracer(provider);
    }
    Ok(())
}

/// Flushes and stops the OTLP provider. Returns false when the flush failed.
fn shutdown_tracer(provider: sdktrace::SdkTracerProvider) -> bool {
    match provider.shutdown() {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to flush traces on shutdown");
            false
        }
    }
}
