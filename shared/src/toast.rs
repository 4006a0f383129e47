//! Toast notification queue.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Warning => "⚠",
            ToastKind::Info => "ℹ",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Warning => "toast-warning",
            ToastKind::Info => "toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: Option<String>,
    pub message: String,
    pub duration_ms: u32,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    default_duration_ms: u32,
}

impl ToastQueue {
    pub fn new(default_duration_ms: u32) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            default_duration_ms,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Append a toast and return its id
    pub fn push(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        title: Option<String>,
        duration_ms: Option<u32>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            title,
            message: message.into(),
            duration_ms: duration_ms.unwrap_or(self.default_duration_ms),
        });
        id
    }

    /// Remove toast `id`; unknown ids are ignored
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_unique_ids_and_default_duration() {
        let mut queue = ToastQueue::new(5000);
        let a = queue.push(ToastKind::Success, "Saved", None, None);
        let b = queue.push(ToastKind::Error, "Failed", Some("Oops".into()), Some(1000));
        assert_ne!(a, b);
        assert_eq!(queue.toasts()[0].duration_ms, 5000);
        assert_eq!(queue.toasts()[1].duration_ms, 1000);
        assert_eq!(queue.toasts()[1].title.as_deref(), Some("Oops"));
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::new(5000);
        let a = queue.push(ToastKind::Info, "one", None, None);
        let b = queue.push(ToastKind::Warning, "two", None, None);
        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);

        // Ids are never reused after a dismissal
        let c = queue.push(ToastKind::Info, "three", None, None);
        assert!(c > b);
    }
}
