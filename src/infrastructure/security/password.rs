// src/infrastructure/security/password.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id hasher guarding patient and doctor credentials. Hashing and
/// verification are CPU-heavy, so both run on the blocking thread pool.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

fn join_failure(err: tokio::task::JoinError) -> ApplicationError {
    ApplicationError::infrastructure(format!("password task failed: {err}"))
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            let digest = Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map_err(|err| {
                    ApplicationError::infrastructure(format!("password hashing failed: {err}"))
                })?;
            Ok(digest.to_string())
        })
        .await
        .map_err(join_failure)?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || -> ApplicationResult<()> {
            let parsed = PasswordHash::new(&expected_hash).map_err(|err| {
                ApplicationError::infrastructure(format!("stored hash is unreadable: {err}"))
            })?;
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .map_err(|_| ApplicationError::unauthorized("invalid credentials"))
        })
        .await
        .map_err(join_failure)?
    }
}
