//! Login page. Reachable only without a session.
//!
//! There is no remote auth service; signing in matches the email against the
//! team roster and otherwise enrolls a new member for the session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::textbox::{FormHandle, Textbox};
use crate::components::toaster::notify;
use crate::config::ClientConfig;
use crate::form::{FieldDescriptor, FormOptions, FormState, FormValues, InputKind, Rule, SubmitError, SubmitOutcome};
use crate::state::guard;
use crate::state::session::{SESSION_STORAGE_KEY, SessionAction, SessionStore};
use crate::state::team::TeamState;
use crate::state::toast::{ToastKind, ToastQueue};
use crate::types::UserRef;
use crate::util::storage;

pub fn login_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("email", "Email Address")
            .kind(InputKind::Email)
            .placeholder("email@example.com")
            .rule(Rule::required("Email Address is required!"))
            .rule(Rule::email("Enter a valid email address")),
        FieldDescriptor::new("password", "Password")
            .kind(InputKind::Password)
            .placeholder("your password")
            .rule(Rule::required("Password is required!")),
    ]
}

fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map(|first| first.to_uppercase().chain(chars).collect::<String>()).unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve the user signing in with `values`.
///
/// # Errors
///
/// Deactivated members are refused.
pub fn user_for_login(values: &FormValues, team: &TeamState) -> Result<UserRef, SubmitError> {
    let email = values.text("email").trim();
    let known = team.members().iter().find(|m| m.email.eq_ignore_ascii_case(email));
    match known {
        Some(member) if !member.is_active => Err(SubmitError::Rejected(format!("{email} is deactivated"))),
        Some(member) => Ok(member.clone()),
        None => Ok(UserRef {
            id: uuid::Uuid::new_v4().to_string(),
            name: display_name(email),
            title: "Member".to_owned(),
            email: email.to_owned(),
            role: "Member".to_owned(),
            is_active: true,
        }),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<SessionStore>>();
    let team = expect_context::<RwSignal<TeamState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let navigate = use_navigate();
    let signing_in = StoredValue::new(false);

    let form = RwSignal::new(FormState::new(
        login_fields(),
        None,
        FormOptions { validate_on_blur: config.validate_on_blur },
    ));

    let navigate_away = navigate.clone();
    Effect::new(move || {
        let target = session.with(|s| guard::login_page_redirect(s.session()));
        if let Some(to) = target {
            if !signing_in.get_value() {
                navigate_away(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let handler = move |values: &FormValues| -> Result<(), SubmitError> {
            let user = team.with_untracked(|t| user_for_login(values, t))?;
            team.update(|t| t.ensure_member(&user));
            storage::save_json(SESSION_STORAGE_KEY, &user);
            signing_in.set_value(true);
            session.maybe_update(|s| s.dispatch(SessionAction::Login(user)));
            Ok(())
        };
        match form.try_update(|f| f.submit(&handler)) {
            Some(SubmitOutcome::Submitted(values)) => {
                let target = session.with_untracked(|s| guard::post_login_target(s.session().return_to.as_deref()));
                session.maybe_update(|s| s.dispatch(SessionAction::TakeReturnPath));
                leptos::logging::log!("signed in as {}", values.text("email"));
                notify(toasts, "Signed in", ToastKind::Success);
                navigate(target.as_str(), NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
            Some(SubmitOutcome::Rejected(SubmitError::Rejected(message))) => notify(toasts, message, ToastKind::Error),
            _ => {}
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"TaskMe"</h1>
                <p class="login-card__subtitle">"Manage all your tasks in one place"</p>
                <form class="login-form" on:submit=on_submit>
                    {FormHandle::all(form).into_iter().map(|field| view! { <Textbox field=field/> }).collect_view()}
                    <button class="login-button" type="submit">
                        "Log in"
                    </button>
                </form>
            </div>
        </div>
    }
}
