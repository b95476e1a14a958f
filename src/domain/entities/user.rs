//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a user record.
///
/// Maps to the `users` table:
/// - id: VARCHAR(64) PRIMARY KEY (caller-assigned)
/// - first_name: VARCHAR(255) NOT NULL
/// - last_name: VARCHAR(255) NOT NULL
/// - email: VARCHAR(255) NOT NULL
///
/// The identifier is supplied by the caller, not generated; uniqueness is
/// enforced only by the primary-key constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Caller-assigned identifier (primary key)
    pub id: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Email address, used as an alternate lookup key (not unique)
    pub email: String,
}

impl User {
    /// Get the user's full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find all users, ordered by identifier.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Find a user by their identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Find a user by their email address. Absence is `Ok(None)`, not an error.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Upsert a user: insert when the identifier is unused, otherwise update
    /// all fields of the existing record. Returns the persisted record.
    async fn save(&self, user: &User) -> Result<User, AppError>;

    /// Delete the record matching the given entity's identifier.
    async fn delete(&self, user: &User) -> Result<(), AppError>;
}
