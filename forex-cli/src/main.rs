//! Forex CLI
//!
//! Command-line interface for the Forex API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use forex_client::ForexClient;
use forex_types::{CurrencyCode, DEFAULT_BASE};

#[derive(Parser)]
#[command(name = "forex")]
#[command(author, version, about = "Forex API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Forex API
    #[arg(long, env = "FOREX_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the latest rates for a base currency
    Latest {
        /// Base currency (defaults to EUR on the server)
        #[arg(long)]
        base: Option<String>,
        /// Target currencies to keep (comma-separated)
        #[arg(long, value_delimiter = ',')]
        symbols: Vec<String>,
    },
    /// List the supported currency codes
    Currencies,
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ForexClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Latest { base, symbols } => {
            let symbols: Vec<&str> = symbols
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect();
            match client.latest(base.as_deref(), &symbols).await {
                Ok(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                Err(e) if e.is_not_found() => {
                    println!("✗ No rates stored for this base");
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Currencies => {
            for currency in CurrencyCode::all() {
                let marker = if *currency == DEFAULT_BASE { " (default)" } else { "" };
                println!("{}  {}{}", currency.code(), currency.name(), marker);
            }
        }
    }

    Ok(())
}
