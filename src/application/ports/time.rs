// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the current instant. Commands take this instead of calling
/// `Utc::now` directly so tests can pin registration and booking
/// timestamps to a fixed moment.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
