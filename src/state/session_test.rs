use super::*;

fn user(name: &str) -> UserRef {
    UserRef {
        id: format!("id-{name}"),
        name: name.to_owned(),
        title: "Engineer".to_owned(),
        email: format!("{name}@example.com"),
        role: "Member".to_owned(),
        is_active: true,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_default_has_no_user_and_closed_sidebar() {
    let store = SessionStore::default();
    assert!(store.session().user.is_none());
    assert!(!store.session().is_sidebar_open);
    assert!(store.session().return_to.is_none());
    assert!(!store.session().loading);
    assert!(!store.session().signed_out);
    assert!(store.history().is_empty());
}

// =============================================================
// Restore
// =============================================================

#[test]
fn loading_store_waits_for_restore() {
    let mut store = SessionStore::loading();
    assert!(store.session().loading);
    assert!(store.session().user.is_none());

    assert!(store.dispatch(SessionAction::Restored(Some(user("ada")))));
    assert!(!store.session().loading);
    assert_eq!(store.session().user, Some(user("ada")));
}

#[test]
fn restore_without_stored_user_ends_loading() {
    let mut store = SessionStore::loading();
    assert!(store.dispatch(SessionAction::Restored(None)));
    assert!(!store.session().loading);
    assert!(store.session().user.is_none());
}

#[test]
fn restore_applies_only_once() {
    let mut store = SessionStore::loading();
    store.dispatch(SessionAction::Restored(None));
    store.dispatch(SessionAction::Login(user("ada")));
    assert!(!store.dispatch(SessionAction::Restored(Some(user("bob")))));
    assert_eq!(store.session().user, Some(user("ada")));
    assert_eq!(store.history().len(), 2);
}

// =============================================================
// Actions
// =============================================================

#[test]
fn login_and_logout_are_recorded() {
    let mut store = SessionStore::default();
    assert!(store.dispatch(SessionAction::Login(user("ada"))));
    assert!(store.dispatch(SessionAction::Logout));
    assert_eq!(store.history(), &[SessionAction::Login(user("ada")), SessionAction::Logout]);
}

#[test]
fn repeated_login_same_user_is_noop() {
    let mut store = SessionStore::default();
    store.dispatch(SessionAction::Login(user("ada")));
    assert!(!store.dispatch(SessionAction::Login(user("ada"))));
    assert_eq!(store.history().len(), 1);
}

#[test]
fn logout_also_closes_sidebar() {
    let mut store = SessionStore::default();
    store.dispatch(SessionAction::Login(user("ada")));
    store.dispatch(SessionAction::SetOpenSidebar(true));
    store.dispatch(SessionAction::Logout);
    assert!(!store.session().is_sidebar_open);
}

#[test]
fn logout_without_user_is_noop() {
    let mut store = SessionStore::default();
    assert!(!store.dispatch(SessionAction::Logout));
    assert!(store.history().is_empty());
}

#[test]
fn set_open_sidebar_only_records_changes() {
    let mut store = SessionStore::default();
    assert!(!store.dispatch(SessionAction::SetOpenSidebar(false)));
    assert!(store.dispatch(SessionAction::SetOpenSidebar(true)));
    assert!(!store.dispatch(SessionAction::SetOpenSidebar(true)));
    assert_eq!(store.history(), &[SessionAction::SetOpenSidebar(true)]);
}

#[test]
fn return_path_is_remembered_then_taken() {
    let mut store = SessionStore::default();
    assert!(store.dispatch(SessionAction::RememberReturnPath("/tasks".to_owned())));
    assert!(!store.dispatch(SessionAction::RememberReturnPath("/tasks".to_owned())));
    assert_eq!(store.session().return_to.as_deref(), Some("/tasks"));
    assert!(store.dispatch(SessionAction::TakeReturnPath));
    assert!(store.session().return_to.is_none());
    assert!(!store.dispatch(SessionAction::TakeReturnPath));
}

#[test]
fn logout_forgets_return_path_and_marks_signed_out() {
    let mut store = SessionStore::default();
    store.dispatch(SessionAction::RememberReturnPath("/task/42".to_owned()));
    store.dispatch(SessionAction::Login(user("ada")));
    store.dispatch(SessionAction::Logout);
    assert!(store.session().return_to.is_none());
    assert!(store.session().signed_out);

    store.dispatch(SessionAction::Login(user("bob")));
    assert!(!store.session().signed_out);
}
