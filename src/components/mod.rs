//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the application chrome and entry forms while reading
//! and writing shared state from Leptos context providers.

pub mod add_task;
pub mod add_user;
pub mod layout;
pub mod mobile_sidebar;
pub mod modal;
pub mod navbar;
pub mod scroll_top;
pub mod sidebar;
pub mod textbox;
pub mod toaster;
