//! Application Context
//!
//! Shared state provided via Leptos Context API.

use chrono::FixedOffset;
use election_admin_core::format::offset_from_js_minutes;
use election_admin_core::{AdminConfig, Level, Notification, Notify, StatusFilter};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// A notification currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: Level,
    pub message: String,
}

impl Toast {
    pub fn class(&self) -> &'static str {
        match self.level {
            Level::Success => "toast toast-success",
            Level::Error => "toast toast-error",
        }
    }
}

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Visible toasts, oldest first
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast: StoredValue<u64>,
    config: StoredValue<AdminConfig>,
    /// Viewer's UTC offset, read once at startup
    pub offset: FixedOffset,
}

impl AppContext {
    pub fn new(config: AdminConfig) -> Self {
        let minutes = js_sys::Date::new_0().get_timezone_offset() as i32;
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_toast: StoredValue::new(0),
            config: StoredValue::new(config),
            offset: offset_from_js_minutes(minutes),
        }
    }

    pub fn config(&self) -> AdminConfig {
        self.config.get_value()
    }

    /// Tab selected when an entity page opens
    pub fn default_status(&self) -> StatusFilter {
        self.config.with_value(|config| config.default_status)
    }

    /// Remove a toast before its timer fires
    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl Notify for AppContext {
    fn notify(&self, notification: Notification) {
        let id = self.next_toast.get_value();
        self.next_toast.set_value(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                level: notification.level,
                message: notification.message,
            })
        });

        let ctx = *self;
        let timeout = self.config.with_value(|config| config.toast_timeout_ms);
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            ctx.dismiss(id);
        });
    }
}
