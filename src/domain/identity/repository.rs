// src/domain/identity/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::identity::entity::{Doctor, NewDoctor, NewPatient, Patient, PatientUpdate};
use crate::domain::identity::value_objects::{EmailAddress, IdentityId};
use async_trait::async_trait;

#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn insert(&self, new_patient: NewPatient) -> DomainResult<Patient>;

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Patient>>;

    async fn find_by_id(&self, id: IdentityId) -> DomainResult<Option<Patient>>;

    async fn update(&self, update: PatientUpdate) -> DomainResult<Patient>;

    /// Write only the refresh-token slot. Must not touch any other column,
    /// so a session rotation never re-validates or re-hashes credentials.
    async fn set_refresh_token(
        &self,
        id: IdentityId,
        refresh_token: Option<&str>,
    ) -> DomainResult<()>;
}

#[async_trait]
pub trait DoctorRepository: Send + Sync {
    async fn insert(&self, new_doctor: NewDoctor) -> DomainResult<Doctor>;

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Doctor>>;

    async fn find_by_id(&self, id: IdentityId) -> DomainResult<Option<Doctor>>;

    /// Directory listing, newest registration first.
    async fn list(&self) -> DomainResult<Vec<Doctor>>;

    /// Write only the refresh-token slot; see `PatientRepository`.
    async fn set_refresh_token(
        &self,
        id: IdentityId,
        refresh_token: Option<&str>,
    ) -> DomainResult<()>;
}
