//! Notification port for user-visible outcomes (toasts).

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    /// The action succeeded.
    Success,
    /// The action failed.
    Error,
}

/// Surface that shows short messages to the user.
pub trait Notifier {
    /// Shows `message` at the given level.
    fn notify(&self, level: NoticeLevel, message: &str);
}
