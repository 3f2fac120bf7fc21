//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - Browser file handle understood by the engine
//! - **Toast Types** - User notifications

use dropload::{FileMeta, UploadSource};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// File Types
// =============================================================================

/// A `File` picked or dropped by the user.
///
/// Cloning only copies the JS handle, never the bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserFile(pub web_sys::File);

impl UploadSource for BrowserFile {
    fn meta(&self) -> FileMeta {
        FileMeta::new(self.0.name(), self.0.type_(), self.0.size() as u64)
    }
}

/// Collect the files of a `FileList` in order.
pub fn files_from_list(list: &web_sys::FileList) -> Vec<BrowserFile> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(BrowserFile)
        .collect()
}

// =============================================================================
// Toast Types
// =============================================================================

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastLevel {
    /// Completed operation
    Success,
    /// Rejected file or failed operation
    Error,
}

impl ToastLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✅",
            ToastLevel::Error => "❌",
        }
    }
}

/// A single notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

/// Append a toast, dropping the oldest ones beyond `max`.
pub fn push_capped(toasts: &mut Vec<Toast>, toast: Toast, max: usize) {
    toasts.push(toast);
    if toasts.len() > max {
        let excess = toasts.len() - max;
        toasts.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_capped_drops_oldest() {
        let mut toasts = Vec::new();
        for i in 0..7 {
            push_capped(&mut toasts, Toast::new(ToastLevel::Success, format!("toast {}", i)), 5);
        }

        assert_eq!(toasts.len(), 5);
        assert_eq!(toasts[0].message, "toast 2");
        assert_eq!(toasts[4].message, "toast 6");
    }

    #[test]
    fn test_toast_ids_are_unique() {
        let a = Toast::new(ToastLevel::Error, "a");
        let b = Toast::new(ToastLevel::Error, "a");
        assert_ne!(a.id, b.id);
        assert_eq!(a.timestamp.len(), 8);
    }

    #[test]
    fn test_level_css_class() {
        assert_eq!(ToastLevel::Success.css_class(), "toast-success");
        assert_eq!(ToastLevel::Error.css_class(), "toast-error");
    }
}
