use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

pub const DEFAULT_TOAST_TTL_SECS: i64 = 4;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Queue of transient notifications shared by controllers.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    queue: Arc<Mutex<VecDeque<Toast>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: Utc::now(),
        };
        let id = toast.id;
        self.lock().push_back(toast);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Info, message)
    }

    pub fn dismiss(&self, id: Uuid) {
        self.lock().retain(|t| t.id != id);
    }

    /// Drop toasts older than `ttl` as of `now`.
    pub fn expire(&self, now: DateTime<Utc>, ttl: Duration) {
        self.lock().retain(|t| now - t.created_at < ttl);
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.lock().iter().cloned().collect()
    }

    /// Take every pending toast.
    pub fn drain(&self) -> Vec<Toast> {
        self.lock().drain(..).collect()
    }

    pub fn last(&self) -> Option<Toast> {
        self.lock().back().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Toast>> {
        self.queue
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_queue() {
        let notifier = Notifier::new();
        let clone = notifier.clone();
        clone.success("Saved");
        notifier.error("Failed");

        let all = notifier.drain();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].kind, ToastKind::Success);
        assert!(clone.snapshot().is_empty());
    }

    #[test]
    fn expire_and_dismiss() {
        let notifier = Notifier::new();
        let keep = notifier.info("fresh");
        let gone = notifier.info("dismissed");
        notifier.dismiss(gone);
        assert_eq!(notifier.snapshot().len(), 1);

        notifier.expire(Utc::now() + Duration::seconds(60), Duration::seconds(DEFAULT_TOAST_TTL_SECS));
        assert!(notifier.snapshot().iter().all(|t| t.id != keep));
    }
}
