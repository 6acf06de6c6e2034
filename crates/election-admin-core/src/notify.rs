//! Notification Channel
//!
//! Mutation handlers report their outcome through `Notify` instead of
//! calling a global toast function. The UI decides how to display it.

use std::cell::RefCell;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

/// A transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

/// Receiver of mutation outcomes
pub trait Notify {
    fn notify(&self, notification: Notification);
}

/// Collects notifications in order; handy for headless callers
#[derive(Debug, Default)]
pub struct NotificationLog(RefCell<Vec<Notification>>);

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far
    pub fn entries(&self) -> Vec<Notification> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl Notify for NotificationLog {
    fn notify(&self, notification: Notification) {
        self.0.borrow_mut().push(notification);
    }
}
