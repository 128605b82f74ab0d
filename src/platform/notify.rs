use parking_lot::Mutex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Success,
    Error,
}

/// A transient user notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub variant: ToastVariant,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Toast {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Success,
            title: title.into(),
            message: Some(message.into()),
        }
    }

    pub fn error(title: impl Into<String>, message: Option<String>) -> Self {
        Self {
            variant: ToastVariant::Error,
            title: title.into(),
            message,
        }
    }
}

/// Fire-and-forget notification sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Notifier that logs each toast and keeps it for later inspection.
#[derive(Default)]
pub struct ToastLog {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }
}

impl Notifier for ToastLog {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Success => {
                tracing::info!(title = %toast.title, message = ?toast.message, "Toast")
            }
            ToastVariant::Error => {
                tracing::warn!(title = %toast.title, message = ?toast.message, "Error toast")
            }
        }
        self.toasts.lock().push(toast);
    }
}
