//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use forex_types::{CurrencyCode, ExchangeRateRecord, RatesRepository, RepoError};

use crate::types::DbExchangeRate;

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &SqlitePool, sql: &str) -> Result<(), sqlx::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt).execute(pool).await?;
        }
    }
    Ok(())
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if !is_in_memory(database_url) {
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to `:memory:` opens a fresh database, so keep exactly one alive.
        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_options.connect_with(options).await?;
        execute_migration(&pool, include_str!("../migrations/0001_create_exchange_rates.sql"))
            .await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Inserts a record, replacing any stored record with the same document id.
    ///
    /// Used by fixtures and seeding tools; the API itself never writes.
    pub async fn upsert_record(&self, record: &ExchangeRateRecord) -> Result<(), RepoError> {
        let row = DbExchangeRate::from_domain(record)?;

        sqlx::query(
            r#"INSERT INTO exchange_rates (id, base, date, rates) VALUES (?, ?, ?, ?)
               ON CONFLICT (id) DO UPDATE SET base = excluded.base, date = excluded.date, rates = excluded.rates"#,
        )
        .bind(record.document_id())
        .bind(&row.base)
        .bind(&row.date)
        .bind(&row.rates)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl RatesRepository for SqliteRepo {
    async fn latest_rate(
        &self,
        base: CurrencyCode,
    ) -> Result<Option<ExchangeRateRecord>, RepoError> {
        let row: Option<DbExchangeRate> = sqlx::query_as(
            r#"SELECT base, date, rates FROM exchange_rates WHERE base = ? ORDER BY date DESC LIMIT 1"#,
        )
        .bind(base.code())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbExchangeRate::into_domain).transpose()
    }
}
