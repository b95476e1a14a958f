//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait. Every query is a
//! static SQL string; every operation runs inside an explicit transaction
//! scope, read-only for the lookups.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{User, UserRepository};
use crate::infrastructure::database::{execute_in_transaction, read_in_transaction};
use crate::shared::error::AppError;

/// Database row representation matching the `users` table schema.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
}

impl UserRow {
    /// Convert database row to domain User entity.
    fn into_user(self) -> User {
        User {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

/// PostgreSQL user repository implementation.
///
/// Provides CRUD operations for users against a PostgreSQL database.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    /// List all users, ordered by identifier.
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let rows = read_in_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    SELECT id, first_name, last_name, email
                    FROM users
                    ORDER BY id
                    "#,
                )
                .fetch_all(&mut **tx)
                .await
                .map_err(AppError::from)
            })
        })
        .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }

    /// Find a user by their identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let id = id.to_string();
        let row = read_in_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    SELECT id, first_name, last_name, email
                    FROM users
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(&mut **tx)
                .await
                .map_err(AppError::from)
            })
        })
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    /// Find a user by their email address.
    ///
    /// Email carries no uniqueness constraint; when several records match,
    /// the first in id order is returned.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.to_string();
        let row = read_in_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    SELECT id, first_name, last_name, email
                    FROM users
                    WHERE email = $1
                    ORDER BY id
                    LIMIT 1
                    "#,
                )
                .bind(email)
                .fetch_optional(&mut **tx)
                .await
                .map_err(AppError::from)
            })
        })
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    /// Upsert a user record, keyed on the caller-assigned identifier.
    /// An existing record has all fields overwritten.
    async fn save(&self, user: &User) -> Result<User, AppError> {
        let user = user.clone();
        let row = execute_in_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    INSERT INTO users (id, first_name, last_name, email)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (id) DO UPDATE
                    SET first_name = EXCLUDED.first_name,
                        last_name = EXCLUDED.last_name,
                        email = EXCLUDED.email
                    RETURNING id, first_name, last_name, email
                    "#,
                )
                .bind(user.id)
                .bind(user.first_name)
                .bind(user.last_name)
                .bind(user.email)
                .fetch_one(&mut **tx)
                .await
                .map_err(AppError::from)
            })
        })
        .await?;

        Ok(row.into_user())
    }

    /// Delete the record matching the given entity's identifier.
    async fn delete(&self, user: &User) -> Result<(), AppError> {
        let id = user.id.clone();
        execute_in_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let result = sqlx::query("DELETE FROM users WHERE id = $1")
                    .bind(&id)
                    .execute(&mut **tx)
                    .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::NotFound(format!("User with id {} not found", id)));
                }

                Ok(())
            })
        })
        .await
    }
}
