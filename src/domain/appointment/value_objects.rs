// src/domain/appointment/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppointmentId(pub i64);

impl AppointmentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "appointment id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AppointmentId> for i64 {
    fn from(value: AppointmentId) -> Self {
        value.0
    }
}

/// One bookable window within a day, kept as a canonical `HH:MM` string so
/// that equal slots compare equal at the storage layer too.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeSlot(String);

impl TimeSlot {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let Some((hours, minutes)) = value.split_once(':') else {
            return Err(invalid_slot(&value));
        };
        if hours.len() != 2 || minutes.len() != 2 {
            return Err(invalid_slot(&value));
        }
        let (Ok(h), Ok(m)) = (hours.parse::<u8>(), minutes.parse::<u8>()) else {
            return Err(invalid_slot(&value));
        };
        if h > 23 || m > 59 {
            return Err(invalid_slot(&value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid_slot(value: &str) -> DomainError {
    DomainError::Validation(format!("'{value}' is not a valid HH:MM time slot"))
}

impl From<TimeSlot> for String {
    fn from(value: TimeSlot) -> Self {
        value.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
