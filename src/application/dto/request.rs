//! Request DTOs
//!
//! Data structures for API request bodies. Field names follow the wire
//! representation (`firstName`, `lastName`).

use serde::Deserialize;
use validator::Validate;

use crate::domain::User;

/// Save (upsert) user request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveUserRequest {
    #[validate(length(min = 1, max = 64, message = "Id must be 1-64 characters"))]
    pub id: String,

    #[validate(length(min = 1, max = 255, message = "First name must be 1-255 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255, message = "Last name must be 1-255 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

impl SaveUserRequest {
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

/// Delete user request; carries the entire entity, matching the
/// delete-by-entity persistence contract.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserRequest {
    #[validate(length(min = 1, max = 64, message = "Id must be 1-64 characters"))]
    pub id: String,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl DeleteUserRequest {
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}
