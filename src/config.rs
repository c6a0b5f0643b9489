//! Client configuration with per-field defaults.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loaded once in `App` and provided through context. In the browser an
//! optional JSON override is read from `localStorage`; everywhere else the
//! defaults apply.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SIDEBAR_TRANSITION_MS: u32 = 300;
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;
pub const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 768;

/// `localStorage` key holding a JSON override of [`ClientConfig`].
pub const CONFIG_STORAGE_KEY: &str = "taskmanager_client_config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid client config: {0}")]
    Invalid(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Enter/exit duration of the mobile sidebar transition.
    pub sidebar_transition_ms: u32,
    /// Auto-dismiss delay for toasts pushed without an explicit duration.
    pub toast_duration_ms: u32,
    /// Validate form fields on blur instead of only at submit time.
    pub validate_on_blur: bool,
    /// Viewport width below which the mobile sidebar replaces the desktop one.
    pub mobile_breakpoint_px: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            sidebar_transition_ms: DEFAULT_SIDEBAR_TRANSITION_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            validate_on_blur: false,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
        }
    }
}

impl ClientConfig {
    /// Parse a JSON override. Keys that are absent keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `raw` is not a JSON object of
    /// the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Load the browser override if present, falling back to defaults.
    pub fn load() -> Self {
        let Some(raw) = crate::util::storage::load_raw(CONFIG_STORAGE_KEY) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}
