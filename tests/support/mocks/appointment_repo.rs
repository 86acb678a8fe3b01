// tests/support/mocks/appointment_repo.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use karte_core::domain::appointment::{
    Appointment, AppointmentId, AppointmentRepository, NewAppointment, TimeSlot,
};
use karte_core::domain::errors::{DomainError, DomainResult};
use karte_core::domain::identity::IdentityId;

/// In-memory appointments table. The check-and-insert inside one lock
/// stands in for the unique index on (doctor_id, date, time_slot): of two
/// racing inserts of the same triple, exactly one succeeds.
pub struct InMemoryAppointmentRepo {
    inner: Mutex<AppointmentStore>,
}

struct AppointmentStore {
    rows: Vec<Appointment>,
    next_id: i64,
}

impl InMemoryAppointmentRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(AppointmentStore {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepo {
    async fn insert(&self, new_appointment: NewAppointment) -> DomainResult<Appointment> {
        let mut store = self.inner.lock().unwrap();
        let clash = store.rows.iter().any(|a| {
            a.doctor_id == new_appointment.doctor_id
                && a.date == new_appointment.date
                && a.time_slot == new_appointment.time_slot
        });
        if clash {
            return Err(DomainError::Conflict("slot is already booked".into()));
        }

        let id = store.next_id;
        store.next_id += 1;
        let appointment = Appointment {
            id: AppointmentId::new(id).unwrap(),
            doctor_id: new_appointment.doctor_id,
            patient_id: new_appointment.patient_id,
            date: new_appointment.date,
            time_slot: new_appointment.time_slot,
            fee: new_appointment.fee,
            created_at: new_appointment.created_at,
        };
        store.rows.push(appointment.clone());
        Ok(appointment)
    }

    async fn find_by_slot(
        &self,
        doctor_id: IdentityId,
        date: NaiveDate,
        time_slot: &TimeSlot,
    ) -> DomainResult<Option<Appointment>> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .rows
            .iter()
            .find(|a| a.doctor_id == doctor_id && a.date == date && &a.time_slot == time_slot)
            .cloned())
    }

    async fn list_by_doctor(&self, doctor_id: IdentityId) -> DomainResult<Vec<Appointment>> {
        let store = self.inner.lock().unwrap();
        let mut appointments: Vec<Appointment> = store
            .rows
            .iter()
            .filter(|a| a.doctor_id == doctor_id)
            .cloned()
            .collect();
        appointments.sort_by(|a, b| a.date.cmp(&b.date).then(a.time_slot.as_str().cmp(b.time_slot.as_str())));
        Ok(appointments)
    }

    async fn list_by_patient(&self, patient_id: IdentityId) -> DomainResult<Vec<Appointment>> {
        let store = self.inner.lock().unwrap();
        let mut appointments: Vec<Appointment> = store
            .rows
            .iter()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect();
        appointments.sort_by(|a, b| a.date.cmp(&b.date).then(a.time_slot.as_str().cmp(b.time_slot.as_str())));
        Ok(appointments)
    }
}
