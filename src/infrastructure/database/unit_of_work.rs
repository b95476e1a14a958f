//! Unit of Work
//!
//! Explicit transactional boundaries for database operations. Every logical
//! unit of work acquires a scoped transaction before running and releases it
//! afterwards: commit on success, rollback-on-drop on every other exit path.

use std::future::Future;
use std::pin::Pin;

use sqlx::{PgPool, Postgres, Transaction};

use crate::shared::error::AppError;

/// Execute a closure within a read-write transaction.
///
/// # Example
/// ```ignore
/// let user = execute_in_transaction(&pool, |tx| Box::pin(async move {
///     sqlx::query_as::<_, UserRow>("INSERT INTO users ... RETURNING *")
///         .fetch_one(&mut **tx)
///         .await
///         .map_err(AppError::from)
/// })).await?;
/// ```
pub async fn execute_in_transaction<F, T>(pool: &PgPool, f: F) -> Result<T, AppError>
where
    F: for<'c> FnOnce(
        &'c mut Transaction<'static, Postgres>,
    ) -> Pin<Box<dyn Future<Output = Result<T, AppError>> + Send + 'c>>,
{
    let mut tx = pool.begin().await?;

    let result = f(&mut tx).await?;

    tx.commit().await?;

    Ok(result)
}

/// Execute a closure within a read-only transaction.
///
/// Signals the store that no write will occur inside the scope, letting it
/// skip write-related overhead. Attempting a write inside the closure fails
/// at the database level.
pub async fn read_in_transaction<F, T>(pool: &PgPool, f: F) -> Result<T, AppError>
where
    F: for<'c> FnOnce(
        &'c mut Transaction<'static, Postgres>,
    ) -> Pin<Box<dyn Future<Output = Result<T, AppError>> + Send + 'c>>,
{
    let mut tx = pool.begin().await?;

    sqlx::query("SET TRANSACTION READ ONLY")
        .execute(&mut *tx)
        .await?;

    let result = f(&mut tx).await?;

    tx.commit().await?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    // Transaction scoping is exercised through the repository integration
    // tests, which require a live database.
}
