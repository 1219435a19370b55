use crate::clock::{Clock, MonotonicIds};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::AbortHandle;
use tokio::time::{Duration, Instant, sleep_until};
use tracing::debug;

pub const NOTIFICATION_TTL_MS: u64 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: i64,
    pub message: String,
}

#[derive(Clone)]
pub struct NotificationQueue {
    inner: Arc<QueueInner>,
}

struct QueueInner {
    entries: Mutex<Vec<Notification>>,
    timers: Mutex<HashMap<i64, AbortHandle>>,
    ids: MonotonicIds,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl NotificationQueue {
    pub fn new(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(QueueInner {
                entries: Mutex::new(Vec::new()),
                timers: Mutex::new(HashMap::new()),
                ids: MonotonicIds::default(),
                clock,
                ttl,
            }),
        }
    }

    pub fn enqueue(&self, message: impl Into<String>) -> i64 {
        let id = self.inner.ids.next(self.inner.clock.now());
        let deadline = Instant::now() + self.inner.ttl;

        self.inner.entries.lock().push(Notification {
            id,
            message: message.into(),
        });

        let mut timers = self.inner.timers.lock();
        let queue = self.clone();
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            queue.expire(id);
        });
        timers.insert(id, handle.abort_handle());

        debug!(id, ttl_ms = self.inner.ttl.as_millis() as u64, "notification queued");
        id
    }

    pub fn remove(&self, id: i64) -> bool {
        if let Some(handle) = self.inner.timers.lock().remove(&id) {
            handle.abort();
        }
        self.remove_entry(id)
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner.entries.lock().clone()
    }

    pub fn shutdown(&self) {
        let timers = std::mem::take(&mut *self.inner.timers.lock());
        let cancelled = timers.len();
        timers.into_values().for_each(|handle| handle.abort());

        debug!(cancelled, "notification timers cancelled");
    }

    fn expire(&self, id: i64) {
        self.inner.timers.lock().remove(&id);
        if self.remove_entry(id) {
            debug!(id, "notification expired");
        }
    }

    fn remove_entry(&self, id: i64) -> bool {
        let mut entries = self.inner.entries.lock();
        let before = entries.len();
        entries.retain(|notification| notification.id != id);
        entries.len() != before
    }
}

#[cfg(test)]
impl NotificationQueue {
    pub fn len(&self) -> usize {
        self.inner.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.lock().is_empty()
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.timers.lock().len()
    }
}
