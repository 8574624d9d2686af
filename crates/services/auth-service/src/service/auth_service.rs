//! Authentication service - Credential checks and session tokens.
//!
//! Password hashing and comparison go through the domain `Password` value
//! object; token signing goes through `jsonwebtoken`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::repository::UserRepository;
use common::{AppError, AppResult, JwtConfig};
use domain::{DomainError, Password, User, EMAIL_IN_USE_MESSAGE};

/// Hash compared against when the email is unknown, so a missing user
/// costs the same as a wrong password.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    Password::new("not-a-real-password")
        .map(Password::into_string)
        .unwrap_or_default()
});

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User identifier
    pub id: Uuid,
    /// User email address
    #[schema(example = "test@test.com")]
    pub email: String,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn signup(&self, email: String, password: String) -> AppResult<User>;

    /// Check credentials and return the matching user
    async fn signin(&self, email: String, password: String) -> AppResult<User>;

    /// Sign a session token for a user
    fn issue_token(&self, user: &User) -> AppResult<String>;

    /// Verify a session token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService over a user repository.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    jwt: JwtConfig,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, jwt: JwtConfig) -> Self {
        Self { users, jwt }
    }

    fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt.secret.as_bytes()
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn signup(&self, email: String, password: String) -> AppResult<User> {
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::bad_request(EMAIL_IN_USE_MESSAGE));
        }

        let password_hash = Password::new(&password)?.into_string();

        self.users.create(User::new(email, password_hash)).await
    }

    async fn signin(&self, email: String, password: String) -> AppResult<User> {
        let existing = self.users.find_by_email(&email).await?;

        let stored = match &existing {
            Some(user) => user.password_hash.as_str(),
            None => DUMMY_HASH.as_str(),
        };
        let password_valid = Password::from_hash(stored).verify(&password);

        match existing {
            Some(user) if password_valid => Ok(user),
            _ => {
                debug!(email = %email, "Signin rejected");
                Err(DomainError::InvalidCredentials.into())
            }
        }
    }

    fn issue_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            id: user.id,
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.jwt.expiration_hours)).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret_bytes()),
        )
        .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret_bytes()),
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    fn jwt() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
        }
    }

    fn stored_user(email: &str, password: &str) -> User {
        let hash = Password::new(password).unwrap().into_string();
        User::new(email.to_string(), hash)
    }

    #[tokio::test]
    async fn test_signin_returns_user_on_matching_password() {
        let user = stored_user("test@test.com", "password");
        let expected_id = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("test@test.com"))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = Authenticator::new(Arc::new(repo), jwt());
        let user = service
            .signin("test@test.com".to_string(), "password".to_string())
            .await
            .unwrap();

        assert_eq!(user.id, expected_id);
    }

    #[tokio::test]
    async fn test_signin_wrong_password_is_invalid_credentials() {
        let user = stored_user("test@test.com", "password");

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let service = Authenticator::new(Arc::new(repo), jwt());
        let err = service
            .signin("test@test.com".to_string(), "wrong".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Invalid credentials"));
    }

    #[tokio::test]
    async fn test_signin_unknown_email_is_invalid_credentials() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let service = Authenticator::new(Arc::new(repo), jwt());
        let err = service
            .signin("nobody@test.com".to_string(), "password".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Invalid credentials"));
    }

    #[tokio::test]
    async fn test_signup_rejects_taken_email_without_creating() {
        let existing = stored_user("test@test.com", "password");

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_create().never();

        let service = Authenticator::new(Arc::new(repo), jwt());
        let err = service
            .signup("test@test.com".to_string(), "password".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Email in use"));
    }

    #[tokio::test]
    async fn test_signup_stores_hashed_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .withf(|user| user.email == "new@test.com" && user.password_hash != "password")
            .times(1)
            .returning(Ok);

        let service = Authenticator::new(Arc::new(repo), jwt());
        let user = service
            .signup("new@test.com".to_string(), "password".to_string())
            .await
            .unwrap();

        assert!(Password::from_hash(user.password_hash).verify("password"));
    }

    #[test]
    fn test_token_round_trip_carries_identity() {
        let service = Authenticator::new(Arc::new(MockUserRepository::new()), jwt());
        let user = User::new("test@test.com".to_string(), String::new());

        let token = service.issue_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.id, user.id);
        assert_eq!(claims.email, "test@test.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_signed_with_other_key_is_rejected() {
        let other = Authenticator::new(
            Arc::new(MockUserRepository::new()),
            JwtConfig {
                secret: "other-secret".to_string(),
                expiration_hours: 1,
            },
        );
        let service = Authenticator::new(Arc::new(MockUserRepository::new()), jwt());
        let user = User::new("test@test.com".to_string(), String::new());

        let token = other.issue_token(&user).unwrap();
        assert!(matches!(service.verify_token(&token), Err(AppError::Jwt(_))));
    }
}
