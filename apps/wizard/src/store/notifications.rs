use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::{StateField, Store};

const SUCCESS_AUTO_HIDE_MS: i64 = 5000;
const INFO_AUTO_HIDE_MS: i64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Error,
    Success,
    Info,
}

/// The single banner shown to the user. A new notification replaces the old one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: DateTime<Utc>,
    pub hide_at: Option<DateTime<Utc>>,
}

impl Notification {
    fn new(kind: NotificationKind, message: String, auto_hide_ms: Option<i64>) -> Self {
        let shown_at = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            message,
            shown_at,
            hide_at: auto_hide_ms.map(|ms| shown_at + Duration::milliseconds(ms)),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.hide_at.is_some_and(|at| now >= at)
    }
}

impl Store {
    /// Errors stay visible until replaced or hidden.
    pub fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("Notification (error): {message}");
        self.set_notification(Notification::new(NotificationKind::Error, message, None));
    }

    pub fn show_success(&mut self, message: impl Into<String>, auto_hide: bool) {
        let message = message.into();
        info!("Notification (success): {message}");
        let hide = auto_hide.then_some(SUCCESS_AUTO_HIDE_MS);
        self.set_notification(Notification::new(NotificationKind::Success, message, hide));
    }

    pub fn show_info(&mut self, message: impl Into<String>, auto_hide: bool) {
        let message = message.into();
        info!("Notification (info): {message}");
        let hide = auto_hide.then_some(INFO_AUTO_HIDE_MS);
        self.set_notification(Notification::new(NotificationKind::Info, message, hide));
    }

    pub fn hide_notification(&mut self) {
        if self.state().notification.is_some() {
            self.update(&[StateField::Notification], |s| s.notification = None);
        }
    }

    /// The visible banner, if any. Auto-hidden banners are reported as gone.
    pub fn current_notification(&self) -> Option<&Notification> {
        let now = Utc::now();
        self.state()
            .notification
            .as_ref()
            .filter(|n| !n.is_expired(now))
    }

    fn set_notification(&mut self, notification: Notification) {
        self.update(&[StateField::Notification], |s| {
            s.notification = Some(notification);
        });
    }
}
