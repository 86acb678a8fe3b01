// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by value objects, entities, and repositories.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A value object rejected its input (email, time slot, story field).
    #[error("invalid value: {0}")]
    Validation(String),
    /// A uniqueness rule was violated, such as a doctor slot booked twice.
    #[error("already taken: {0}")]
    Conflict(String),
    #[error("no such record: {0}")]
    NotFound(String),
    /// Database failure surfaced by a repository. The detail stays in the
    /// logs and never reaches a client.
    #[error("storage failure: {0}")]
    Persistence(String),
}
