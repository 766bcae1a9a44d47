//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use forex_types::{CurrencyCode, ExchangeRateRecord, RatesRepository, RepoError};

use crate::types::DbExchangeRate;

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        execute_migration(
            &pool,
            include_str!("../migrations/0001_create_exchange_rates.sql"),
            "0001",
        )
        .await?;
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Inserts a record, replacing any stored record with the same document id.
    pub async fn upsert_record(&self, record: &ExchangeRateRecord) -> Result<(), RepoError> {
        let row = DbExchangeRate::from_domain(record)?;

        sqlx::query(
            r#"INSERT INTO exchange_rates (id, base, date, rates) VALUES ($1, $2, $3, $4)
               ON CONFLICT (id) DO UPDATE SET base = EXCLUDED.base, date = EXCLUDED.date, rates = EXCLUDED.rates"#,
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
impl RatesRepository for PostgresRepo {
    async fn latest_rate(
        &self,
        base: CurrencyCode,
    ) -> Result<Option<ExchangeRateRecord>, RepoError> {
        let row: Option<DbExchangeRate> = sqlx::query_as(
            r#"SELECT base, date, rates FROM exchange_rates WHERE base = $1 ORDER BY date DESC LIMIT 1"#,
        )
        .bind(base.code())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbExchangeRate::into_domain).transpose()
    }
}
