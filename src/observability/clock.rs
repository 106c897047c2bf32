//! Time source for event timestamps

use chrono::{DateTime, Utc};

/// Something that can tell the current instant in UTC
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
