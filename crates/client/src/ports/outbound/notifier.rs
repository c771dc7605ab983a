//! Notifier Port - transient user-visible notifications
//!
//! Every async store operation reports pending/success/warning/failure
//! through this port. The UI shell supplies a toast-backed implementation;
//! headless runs use the tracing-backed one in infrastructure.

/// Category of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// An async operation started and is in flight
    Pending,
    Success,
    /// The operation completed but produced nothing usable
    Warning,
    Error,
}

/// A transient, non-blocking message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn pending(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Pending,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Sink for transient notifications
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
