//! Notifier that forwards user notices to the `tracing` pipeline.

use crate::board::ports::{NoticeLevel, Notifier};

/// Writes notices as log events; useful for headless hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Success => tracing::info!(notice = message, "board notice"),
            NoticeLevel::Error => tracing::error!(notice = message, "board notice"),
        }
    }
}
