// src/application/commands/doctors/service.rs
use std::sync::Arc;

use crate::application::commands::sessions::{IssuedSession, SessionIssuer};
use crate::application::dto::TokenSubject;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::{security::PasswordHasher, time::Clock};
use crate::domain::identity::{Doctor, DoctorRepository, Role};

pub struct DoctorCommandService {
    pub(super) doctor_repo: Arc<dyn DoctorRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) sessions: SessionIssuer,
    pub(super) clock: Arc<dyn Clock>,
}

impl DoctorCommandService {
    pub fn new(
        doctor_repo: Arc<dyn DoctorRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        sessions: SessionIssuer,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            doctor_repo,
            password_hasher,
            sessions,
            clock,
        }
    }

    pub(super) async fn open_session(&self, doctor: &Doctor) -> ApplicationResult<IssuedSession> {
        let session = self
            .sessions
            .issue(TokenSubject {
                id: doctor.id,
                name: doctor.full_name.to_string(),
                role: Role::Doctor,
            })
            .await?;

        self.doctor_repo
            .set_refresh_token(doctor.id, Some(&session.refresh_token))
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to persist refresh token");
                ApplicationError::infrastructure("failed to open session")
            })?;

        Ok(session)
    }
}
