// src/domain/appointment/repository.rs
use crate::domain::appointment::entity::{Appointment, NewAppointment};
use crate::domain::appointment::value_objects::TimeSlot;
use crate::domain::errors::DomainResult;
use crate::domain::identity::IdentityId;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Create a reservation. Implementations must guarantee uniqueness of
    /// the (doctor, date, time slot) triple at the storage layer and report
    /// a lost race as `DomainError::Conflict`; callers may pre-check with
    /// `find_by_slot` but must not rely on that check for correctness.
    async fn insert(&self, new_appointment: NewAppointment) -> DomainResult<Appointment>;

    async fn find_by_slot(
        &self,
        doctor_id: IdentityId,
        date: NaiveDate,
        time_slot: &TimeSlot,
    ) -> DomainResult<Option<Appointment>>;

    async fn list_by_doctor(&self, doctor_id: IdentityId) -> DomainResult<Vec<Appointment>>;

    async fn list_by_patient(&self, patient_id: IdentityId) -> DomainResult<Vec<Appointment>>;
}
