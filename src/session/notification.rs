//! Transient user-facing messages

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn from_success(success: bool) -> Self {
        if success {
            NotificationKind::Success
        } else {
            NotificationKind::Error
        }
    }
}

/// A message shown until it expires or is dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub expires_at: Instant,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        message: impl Into<String>,
        now: Instant,
        ttl: Duration,
    ) -> Self {
        Notification {
            kind,
            message: message.into(),
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let now = Instant::now();
        let notification = Notification::new(
            NotificationKind::Success,
            "saved",
            now,
            Duration::from_millis(1000),
        );
        assert!(!notification.is_expired(now));
        assert!(!notification.is_expired(now + Duration::from_millis(999)));
        assert!(notification.is_expired(now + Duration::from_millis(1000)));
    }

    #[test]
    fn test_kind_from_success() {
        assert_eq!(NotificationKind::from_success(true), NotificationKind::Success);
        assert_eq!(NotificationKind::from_success(false), NotificationKind::Error);
    }
}
