//! Notifications
//!
//! User-visible outcomes of controller operations. Messages are carried as
//! translation keys and rendered in whatever language is active at display time.

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "toast success",
            NoticeKind::Error => "toast error",
            NoticeKind::Info => "toast info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub kind: NoticeKind,
    pub title_key: &'static str,
    pub message_key: &'static str,
}

impl Notification {
    pub fn success(message_key: &'static str) -> Self {
        Self { kind: NoticeKind::Success, title_key: "success", message_key }
    }

    pub fn error(message_key: &'static str) -> Self {
        Self { kind: NoticeKind::Error, title_key: "error", message_key }
    }

    pub fn info(message_key: &'static str) -> Self {
        Self { kind: NoticeKind::Info, title_key: "notice", message_key }
    }
}

impl From<&ValidationError> for Notification {
    fn from(err: &ValidationError) -> Self {
        Notification::error(err.message_key())
    }
}

/// Sink for notifications raised by controller operations
pub trait Notifier {
    fn notify(&mut self, notice: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notice: Notification) {
        self.push(notice);
    }
}
