// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Error type shared by every command and query service. The HTTP layer
/// maps each variant onto a status code, so handlers never inspect these
/// beyond converting them.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("rejected input: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("state conflict: {0}")]
    Conflict(String),

    #[error("authentication required: {0}")]
    Unauthorized(String),

    #[error("operation not allowed: {0}")]
    Forbidden(String),

    #[error("backend failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}
