//! User-facing notification contract.
//!
//! The panel reports mutation failures as transient notices; how they are
//! displayed (toast, status bar, log line) is up to the embedding UI.

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub auto_dismiss: bool,
}

impl Notice {
    /// An auto-dismissing error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
            auto_dismiss: true,
        }
    }
}

/// Destination for notices raised by the panel.
pub trait NotificationSink {
    fn notify(&self, notice: Notice);
}
