//! User-facing notifications ("toasts") emitted by client-state stores.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Severity of a notification. Stores only ever report success or info.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    /// Create a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    /// Create an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

/// Sink for notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Writes notifications to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            kind = %notification.level,
            text = %notification.message,
            "notification"
        );
    }
}

/// Buffers notifications until a presentation layer drains them.
///
/// Clones share the buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pending: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every buffered notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }

    /// Copy of the buffered notifications without draining them.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.pending.borrow().clone()
    }

    /// The most recent notification.
    pub fn last(&self) -> Option<Notification> {
        self.pending.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.pending.borrow_mut().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_drains_in_order() {
        let recorder = RecordingNotifier::new();
        let handle = recorder.clone();

        handle.notify(Notification::success("first"));
        handle.notify(Notification::info("second"));

        assert_eq!(recorder.last(), Some(Notification::info("second")));
        let drained = recorder.drain();
        assert_eq!(
            drained,
            vec![Notification::success("first"), Notification::info("second")]
        );
        assert!(recorder.snapshot().is_empty());
    }
}
