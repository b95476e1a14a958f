//! Database Module
//!
//! PostgreSQL connection pool, schema management, and transaction scoping.

pub mod unit_of_work;

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};

use crate::config::{DatabaseSettings, SchemaMode};

pub use unit_of_work::{execute_in_transaction, read_in_transaction};

/// Create a PostgreSQL connection pool.
///
/// The pool is created lazily; no connection is established until first use.
/// Statement logging follows the `log_statements` setting.
pub fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(&settings.url)?;
    if !settings.log_statements {
        options = options.disable_statement_logging();
    }

    Ok(PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect_lazy_with(options))
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Apply the configured schema-management mode.
///
/// `SchemaMode::Create` runs the embedded migrations before the server
/// starts accepting traffic; `SchemaMode::None` assumes the schema exists.
pub async fn ensure_schema(
    settings: &DatabaseSettings,
    pool: &PgPool,
) -> Result<(), sqlx::migrate::MigrateError> {
    match settings.schema_mode {
        SchemaMode::Create => {
            run_migrations(pool).await?;
            tracing::info!("Database schema is up to date");
            Ok(())
        }
        SchemaMode::None => Ok(()),
    }
}
