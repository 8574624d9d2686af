//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh identifier
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "test@test.com"))]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_gets_unique_id() {
        let a = User::new("a@test.com".to_string(), "hash".to_string());
        let b = User::new("b@test.com".to_string(), "hash".to_string());

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let user = User::new("a@test.com".to_string(), "secret-hash".to_string());
        let json = serde_json::to_string(&user).unwrap();

        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn test_user_response_exposes_id_and_email_only() {
        let user = User::new("a@test.com".to_string(), "hash".to_string());
        let value = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(value["email"], "a@test.com");
        assert_eq!(value["id"], user.id.to_string());
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
