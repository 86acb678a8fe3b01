// src/application/commands/sessions.rs
use crate::application::{
    dto::{AuthTokenDto, TokenSubject},
    error::ApplicationResult,
    ports::security::TokenManager,
};
use std::sync::Arc;
use uuid::Uuid;

/// Message shared by every authentication-failure path so that an unknown
/// email and a wrong password are indistinguishable to the caller.
pub const INVALID_CREDENTIALS: &str = "invalid email or password";

/// A freshly minted session: the access token goes to the client, the
/// refresh token is persisted onto the identity record by the calling
/// service. One refresh token per identity; each login overwrites the
/// previous one.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub access: AuthTokenDto,
    pub refresh_token: String,
}

#[derive(Clone)]
pub struct SessionIssuer {
    token_manager: Arc<dyn TokenManager>,
}

impl SessionIssuer {
    pub fn new(token_manager: Arc<dyn TokenManager>) -> Self {
        Self { token_manager }
    }

    pub async fn issue(&self, subject: TokenSubject) -> ApplicationResult<IssuedSession> {
        let access = self.token_manager.issue(subject).await?;
        let refresh_token = Uuid::new_v4().to_string();
        Ok(IssuedSession {
            access,
            refresh_token,
        })
    }
}
