//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod task_details;
pub mod tasks;
pub mod team;
pub mod trash;

use leptos::prelude::*;

use crate::state::session::SessionStore;

/// Id of the signed-in user, recorded as the actor on task history.
pub(crate) fn current_actor(session: RwSignal<SessionStore>) -> Option<String> {
    session.with_untracked(|s| s.session().user.as_ref().map(|u| u.id.clone()))
}
