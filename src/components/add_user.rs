//! Create/update form for team members.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form mounts in create mode, or in update mode when handed an existing
//! member. All four fields are required; the email must also look like an
//! address. Saving is delegated to the caller's `on_submit`; the team page
//! wires it to [`save_member`].

#[cfg(test)]
#[path = "add_user_test.rs"]
mod add_user_test;

use leptos::prelude::*;

use crate::components::modal::ModalWrapper;
use crate::components::textbox::{FormHandle, Textbox};
use crate::components::toaster::notify;
use crate::config::ClientConfig;
use crate::form::{
    FieldDescriptor, FormMode, FormOptions, FormState, FormValues, InputKind, Rule, SubmitError, SubmitOutcome,
};
use crate::state::team::{MemberDraft, TeamError, TeamState};
use crate::state::toast::{ToastKind, ToastQueue};
use crate::types::UserRef;

pub const ADD_USER_TITLE: &str = "ADD NEW USER";
pub const UPDATE_USER_TITLE: &str = "UPDATE USER PROFILE";

pub fn user_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("name", "Full Name")
            .placeholder("Full name")
            .rule(Rule::required("Full name is required!")),
        FieldDescriptor::new("title", "Title")
            .placeholder("Title")
            .rule(Rule::required("Title is required!")),
        FieldDescriptor::new("email", "Email Address")
            .kind(InputKind::Email)
            .placeholder("Email Address")
            .rule(Rule::required("Email Address is required!"))
            .rule(Rule::email("Enter a valid email address")),
        FieldDescriptor::new("role", "Role")
            .placeholder("Role")
            .rule(Rule::required("User role is required!")),
    ]
}

pub fn form_title(mode: FormMode) -> &'static str {
    match mode {
        FormMode::Create => ADD_USER_TITLE,
        FormMode::Update => UPDATE_USER_TITLE,
    }
}

/// Form defaults for editing `user`.
pub fn user_defaults(user: &UserRef) -> FormValues {
    FormValues::new()
        .with("name", user.name.as_str())
        .with("title", user.title.as_str())
        .with("email", user.email.as_str())
        .with("role", user.role.as_str())
}

pub fn member_draft(values: &FormValues) -> MemberDraft {
    MemberDraft {
        name: values.text("name").to_owned(),
        title: values.text("title").to_owned(),
        email: values.text("email").to_owned(),
        role: values.text("role").to_owned(),
    }
}

/// Apply a submitted member form to the roster. `target` is the id being
/// edited, or `None` to add a new member.
///
/// # Errors
///
/// A taken email is reported against the email field; anything else rejects
/// the whole form.
pub fn save_member(team: &mut TeamState, target: Option<&str>, values: &FormValues) -> Result<(), SubmitError> {
    let draft = member_draft(values);
    let result = match target {
        Some(id) => team.update(id, draft),
        None => team.add(draft).map(|_| ()),
    };
    result.map_err(|e| match e {
        TeamError::DuplicateEmail(_) => SubmitError::Field { field: "email".to_owned(), message: e.to_string() },
        TeamError::NotFound(_) => SubmitError::Rejected(e.to_string()),
    })
}

#[component]
pub fn AddUser(
    user_data: Option<UserRef>,
    on_submit: Callback<FormValues, Result<(), SubmitError>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    let defaults = user_data.as_ref().map(user_defaults);
    let form = RwSignal::new(FormState::new(
        user_fields(),
        defaults.as_ref(),
        FormOptions { validate_on_blur: config.validate_on_blur },
    ));
    let title = form_title(form.with_untracked(FormState::mode));

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let handler = move |values: &FormValues| on_submit.run(values.clone());
        match form.try_update(|f| f.submit(&handler)) {
            Some(SubmitOutcome::Submitted(_)) => on_close.run(()),
            Some(SubmitOutcome::Rejected(SubmitError::Rejected(message))) => notify(toasts, message, ToastKind::Error),
            _ => {}
        }
    };

    view! {
        <ModalWrapper on_close=on_close>
            <form class="entity-form" on:submit=on_form_submit>
                <h2 class="entity-form__title">{title}</h2>
                <div class="entity-form__fields">
                    {FormHandle::all(form).into_iter().map(|field| view! { <Textbox field=field/> }).collect_view()}
                </div>
                <div class="entity-form__actions">
                    <button class="btn btn--primary" type="submit">
                        "Submit"
                    </button>
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </ModalWrapper>
    }
}
