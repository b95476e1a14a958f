//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::User;

/// User response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_serializes_camel_case() {
        let response = UserResponse::from(User {
            id: "1".into(),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann@example.com".into(),
        });

        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"firstName\":\"Ann\""));
        assert!(json.contains("\"lastName\":\"Lee\""));
        assert!(!json.contains("first_name"));
    }
}
