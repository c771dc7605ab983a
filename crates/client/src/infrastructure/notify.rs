//! Tracing-backed notifier
//!
//! Routes store notifications to the log. A UI shell swaps in a
//! toast-backed implementation of the same port.

use crate::ports::outbound::{Notification, NotificationKind, Notifier};

#[derive(Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Pending => tracing::info!("{}", notification.message),
            NotificationKind::Success => tracing::info!("{}", notification.message),
            NotificationKind::Warning => tracing::warn!("{}", notification.message),
            NotificationKind::Error => tracing::error!("{}", notification.message),
        }
    }
}
