// src/application/commands/patients/service.rs
use std::sync::Arc;

use crate::application::commands::sessions::{IssuedSession, SessionIssuer};
use crate::application::dto::TokenSubject;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::{security::PasswordHasher, time::Clock};
use crate::domain::identity::{Patient, PatientRepository, Role};

pub struct PatientCommandService {
    pub(super) patient_repo: Arc<dyn PatientRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) sessions: SessionIssuer,
    pub(super) clock: Arc<dyn Clock>,
}

impl PatientCommandService {
    pub fn new(
        patient_repo: Arc<dyn PatientRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        sessions: SessionIssuer,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            patient_repo,
            password_hasher,
            sessions,
            clock,
        }
    }

    /// Issue a session for a patient and persist the rotated refresh token.
    /// A persistence failure here is fatal to the surrounding request.
    pub(super) async fn open_session(&self, patient: &Patient) -> ApplicationResult<IssuedSession> {
        let session = self
            .sessions
            .issue(TokenSubject {
                id: patient.id,
                name: patient.name.to_string(),
                role: Role::Patient,
            })
            .await?;

        self.patient_repo
            .set_refresh_token(patient.id, Some(&session.refresh_token))
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to persist refresh token");
                ApplicationError::infrastructure("failed to open session")
            })?;

        Ok(session)
    }
}
