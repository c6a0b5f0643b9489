//! Transient notification queue rendered by the toaster.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and handlers push messages here instead of rendering their own
//! banners. Toasts stack oldest first, expire after their duration, and can
//! be dismissed by hand; dismissing one that already expired does nothing.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
    pub created_at_ms: f64,
}

impl Toast {
    pub fn expires_at_ms(&self) -> f64 {
        self.created_at_ms + f64::from(self.duration_ms)
    }
}

#[derive(Clone, Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    default_duration_ms: u32,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TOAST_DURATION_MS)
    }
}

impl ToastQueue {
    pub fn new(default_duration_ms: u32) -> Self {
        Self { toasts: Vec::new(), next_id: 0, default_duration_ms }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Queue a toast with an explicit duration and return its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, duration_ms: u32, now_ms: f64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, message: message.into(), kind, duration_ms, created_at_ms: now_ms });
        id
    }

    /// Queue a toast with the configured default duration.
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind, now_ms: f64) -> u64 {
        self.push(message, kind, self.default_duration_ms, now_ms)
    }

    /// Remove a toast. Returns whether it was still queued.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast whose duration has elapsed at `now_ms`.
    pub fn expire(&mut self, now_ms: f64) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at_ms() > now_ms);
        before - self.toasts.len()
    }
}
