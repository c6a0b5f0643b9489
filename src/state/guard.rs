//! Route guard deciding between the authenticated shell and the login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The layout route evaluates the guard once per render. Absence of a user is
//! an expected state, so the outcome is a plain value. While the stored user
//! is still being read back the guard stays `Pending` and neither renders
//! the shell nor redirects.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{AppRoute, DASHBOARD_PATH, LOGIN_PATH};
use crate::state::session::Session;

/// Where to send an unauthenticated visitor, and where they were headed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRedirect {
    pub to: &'static str,
    pub from: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Pending,
    Authenticated,
    Unauthenticated(LoginRedirect),
}

/// Evaluate the guard for a request to `requested_path`.
pub fn evaluate(session: &Session, requested_path: &str) -> GuardOutcome {
    if session.loading {
        GuardOutcome::Pending
    } else if session.user.is_some() {
        GuardOutcome::Authenticated
    } else {
        GuardOutcome::Unauthenticated(LoginRedirect { to: LOGIN_PATH, from: requested_path.to_owned() })
    }
}

/// Whether the layout should remember where `redirect` came from. Nothing
/// is remembered after an explicit logout, so the next login starts at the
/// dashboard.
pub fn should_remember(session: &Session, redirect: &LoginRedirect) -> bool {
    !session.signed_out && session.return_to.as_deref() != Some(redirect.from.as_str())
}

/// Where a successful login lands: the remembered path when it is a guarded
/// route, otherwise the dashboard.
pub fn post_login_target(return_to: Option<&str>) -> String {
    match return_to {
        Some(path) if AppRoute::parse(path).requires_session() && !matches!(AppRoute::parse(path), AppRoute::Root) => {
            path.to_owned()
        }
        _ => DASHBOARD_PATH.to_owned(),
    }
}

/// Visiting the login page with a live session forwards to the dashboard.
pub fn login_page_redirect(session: &Session) -> Option<&'static str> {
    (!session.loading && session.user.is_some()).then_some(DASHBOARD_PATH)
}
