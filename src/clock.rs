use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Default)]
pub struct MonotonicIds {
    last: AtomicI64,
}

impl MonotonicIds {
    pub fn next(&self, at: DateTime<Utc>) -> i64 {
        let candidate = at.timestamp_millis();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(candidate.max(last.saturating_add(1)))
            });

        match previous {
            Ok(last) | Err(last) => candidate.max(last.saturating_add(1)),
        }
    }
}

#[cfg(test)]
pub struct ManualClock {
    now: parking_lot::Mutex<DateTime<Utc>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn at(rfc3339: &str) -> Self {
        let now = DateTime::parse_from_rfc3339(rfc3339)
            .expect("valid RFC 3339 timestamp")
            .with_timezone(&Utc);
        Self {
            now: parking_lot::Mutex::new(now),
        }
    }

    pub fn advance_millis(&self, millis: i64) {
        let mut now = self.now.lock();
        *now += chrono::Duration::milliseconds(millis);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}
