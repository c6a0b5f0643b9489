//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware components. The store is the single
//! shared mutable resource of the shell; it only changes through
//! [`SessionAction`]s so the sequence of changes stays inspectable.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::types::UserRef;

/// `localStorage` key for the signed-in user.
pub const SESSION_STORAGE_KEY: &str = "taskmanager_user";

/// Current user plus transient shell flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<UserRef>,
    /// True until the stored user has been read back after mount.
    pub loading: bool,
    /// Only meaningful below the mobile breakpoint.
    pub is_sidebar_open: bool,
    /// Path the guard turned away, restored after login.
    pub return_to: Option<String>,
    /// Set by an explicit logout until the next login. The page left behind
    /// is not a return path.
    pub signed_out: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// Result of reading the stored user; ends the loading phase.
    Restored(Option<UserRef>),
    Login(UserRef),
    Logout,
    SetOpenSidebar(bool),
    RememberReturnPath(String),
    TakeReturnPath,
}

/// Owner of the [`Session`] and the log of actions applied to it.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    session: Session,
    history: Vec<SessionAction>,
}

impl SessionStore {
    /// A store waiting for [`SessionAction::Restored`]; the guard holds off
    /// until then.
    pub fn loading() -> Self {
        Self { session: Session { loading: true, ..Session::default() }, history: Vec::new() }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Actions that changed the session, oldest first.
    pub fn history(&self) -> &[SessionAction] {
        &self.history
    }

    /// Apply `action`. Returns whether the session changed; no-op actions are
    /// not recorded.
    pub fn dispatch(&mut self, action: SessionAction) -> bool {
        let session = &mut self.session;
        let changed = match &action {
            SessionAction::Restored(user) => {
                if session.loading {
                    session.loading = false;
                    if session.user.is_none() {
                        session.user.clone_from(user);
                    }
                    true
                } else {
                    false
                }
            }
            SessionAction::Login(user) => {
                let was_signed_out = std::mem::take(&mut session.signed_out);
                if session.user.as_ref() == Some(user) {
                    was_signed_out
                } else {
                    session.user = Some(user.clone());
                    true
                }
            }
            SessionAction::Logout => {
                let had_user = session.user.take().is_some();
                let was_open = std::mem::take(&mut session.is_sidebar_open);
                let had_return = session.return_to.take().is_some();
                session.signed_out |= had_user;
                had_user || was_open || had_return
            }
            SessionAction::SetOpenSidebar(open) => {
                let changed = session.is_sidebar_open != *open;
                session.is_sidebar_open = *open;
                changed
            }
            SessionAction::RememberReturnPath(path) => {
                if session.return_to.as_deref() == Some(path.as_str()) {
                    false
                } else {
                    session.return_to = Some(path.clone());
                    true
                }
            }
            SessionAction::TakeReturnPath => session.return_to.take().is_some(),
        };
        if changed {
            self.history.push(action);
        }
        changed
    }
}
