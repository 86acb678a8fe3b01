// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use karte_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};

use super::time::fixed_now;

/// Deterministic stand-in for the real hasher: `hash` prefixes the input,
/// `verify` checks for that prefix form.
pub struct DummyPasswordHasher;

pub fn hashed(password: &str) -> String {
    format!("hashed:{password}")
}

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(hashed(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == hashed(password) {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = fixed_now();
        Ok(AuthTokenDto {
            token: format!("token-{}-{}", i64::from(subject.id), subject.role.as_str()),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, _token: &str) -> ApplicationResult<AuthenticatedUser> {
        Err(ApplicationError::unauthorized("invalid token"))
    }
}
