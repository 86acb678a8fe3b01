// src/domain/identity/entity.rs
use crate::domain::identity::value_objects::{DisplayName, EmailAddress, IdentityId, PasswordHash};
use chrono::{DateTime, Utc};

/// A registered patient. `refresh_token` is the single currently-valid
/// refresh token for this identity; logging in elsewhere overwrites it and
/// logging out clears it.
#[derive(Debug, Clone)]
pub struct Patient {
    pub id: IdentityId,
    pub name: DisplayName,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPatient {
    pub name: DisplayName,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

/// Partial profile update; only the supplied fields change.
#[derive(Debug, Clone)]
pub struct PatientUpdate {
    pub id: IdentityId,
    pub name: Option<DisplayName>,
    pub password_hash: Option<PasswordHash>,
}

impl PatientUpdate {
    pub fn new(id: IdentityId) -> Self {
        Self {
            id,
            name: None,
            password_hash: None,
        }
    }

    pub fn with_name(mut self, name: DisplayName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.password_hash.is_none()
    }
}

/// A registered doctor. The certificate and profile-picture fields hold
/// stored-path references handed back by the upload collaborator; this
/// crate never touches the files themselves.
#[derive(Debug, Clone)]
pub struct Doctor {
    pub id: IdentityId,
    pub full_name: DisplayName,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub specializations: Vec<String>,
    pub license: String,
    pub fee: Option<i64>,
    pub certificate_path: String,
    pub profile_pic_path: String,
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewDoctor {
    pub full_name: DisplayName,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub specializations: Vec<String>,
    pub license: String,
    pub fee: Option<i64>,
    pub certificate_path: String,
    pub profile_pic_path: String,
    pub created_at: DateTime<Utc>,
}
