//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `tasks`, `team`, `toast`) so
//! components depend on small focused models. The sidebar controller and
//! route guard are plain Rust so their rules can be tested without a
//! reactive runtime.

pub mod guard;
pub mod session;
pub mod sidebar;
pub mod tasks;
pub mod team;
pub mod toast;
