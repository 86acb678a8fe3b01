// tests/support/mocks/time.rs
use chrono::{DateTime, TimeZone, Utc};
use karte_core::application::ports::time::Clock;
use once_cell::sync::Lazy;

static FIXED: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap());

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}
