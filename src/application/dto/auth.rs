// src/application/dto/auth.rs
use crate::domain::identity::{IdentityId, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The access credential handed to clients after a successful login or
/// registration. The refresh token it rotates stays server-side on the
/// identity record and is never part of this payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// The acting identity resolved from a verified access token. Attached to
/// the request by the `Authenticated` extractor; handlers never parse
/// credentials themselves.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: IdentityId,
    pub name: String,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn is_doctor(&self) -> bool {
        self.role == Role::Doctor
    }

    pub fn is_patient(&self) -> bool {
        self.role == Role::Patient
    }
}

/// What gets baked into a freshly issued access token.
#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub id: IdentityId,
    pub name: String,
    pub role: Role,
}
