//! User Service
//!
//! Delegation point between the HTTP handlers and the persistence layer.
//! Each operation forwards to the corresponding repository operation
//! without transformation; no business branching lives here.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{User, UserRepository};
use crate::shared::error::AppError;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users, ordered by identifier
    async fn find_all(&self) -> Result<Vec<User>, UserError>;

    /// Get a user by identifier
    async fn find_one(&self, id: &str) -> Result<User, UserError>;

    /// Get a user by email address
    async fn find_by_email(&self, email: &str) -> Result<User, UserError>;

    /// Insert or update a user, returning the persisted record
    async fn save(&self, user: User) -> Result<User, UserError>;

    /// Delete the record matching the given entity
    async fn delete(&self, user: User) -> Result<(), UserError>;
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for UserError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::NotFound(_) => UserError::NotFound,
            AppError::Conflict(msg) => UserError::Conflict(msg),
            AppError::BackendUnavailable(msg) => UserError::Unavailable(msg),
            e => UserError::Internal(e.to_string()),
        }
    }
}

/// UserService implementation
pub struct UserServiceImpl<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UserServiceImpl<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UserService for UserServiceImpl<R>
where
    R: UserRepository + 'static,
{
    async fn find_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.repo.find_all().await?)
    }

    async fn find_one(&self, id: &str) -> Result<User, UserError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, UserError> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFound)
    }

    async fn save(&self, user: User) -> Result<User, UserError> {
        Ok(self.repo.save(&user).await?)
    }

    async fn delete(&self, user: User) -> Result<(), UserError> {
        Ok(self.repo.delete(&user).await?)
    }
}
