// src/infrastructure/time.rs
use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall-clock implementation wired in by the running service. Tests use
/// a fixed clock instead.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
