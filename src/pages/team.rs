//! Team roster page: add, edit, activate, re-role, and remove members.

use leptos::prelude::*;

use crate::components::add_user::{AddUser, save_member};
use crate::components::toaster::notify;
use crate::form::{FormValues, SubmitError};
use crate::state::team::{TeamState, role_choices};
use crate::state::toast::{ToastKind, ToastQueue};
use crate::types::UserRef;

#[component]
pub fn TeamPage() -> impl IntoView {
    let team = expect_context::<RwSignal<TeamState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    // `Some(None)` opens the add form, `Some(Some(user))` edits `user`.
    let editing = RwSignal::new(None::<Option<UserRef>>);

    let on_submit = Callback::new(move |values: FormValues| {
        let target = editing.with_untracked(|e| e.clone().flatten().map(|u| u.id));
        let result = team
            .try_update(|t| save_member(t, target.as_deref(), &values))
            .unwrap_or_else(|| Err(SubmitError::Rejected("team roster is unavailable".to_owned())));
        if result.is_ok() {
            let message = if target.is_some() { "Profile updated" } else { "New user added" };
            notify(toasts, message, ToastKind::Success);
        }
        result
    });
    let on_close = Callback::new(move |()| editing.set(None));

    let set_active = move |id: String, active: bool| match team.try_update(|t| t.set_active(&id, active)) {
        Some(Ok(())) => {
            let message = if active { "User activated" } else { "User deactivated" };
            notify(toasts, message, ToastKind::Info);
        }
        Some(Err(e)) => notify(toasts, e.to_string(), ToastKind::Error),
        None => {}
    };

    let change_role = move |id: String, role: String| match team.try_update(|t| t.change_role(&id, &role)) {
        Some(Ok(())) => notify(toasts, format!("Role changed to {role}"), ToastKind::Info),
        Some(Err(e)) => notify(toasts, e.to_string(), ToastKind::Error),
        None => {}
    };

    let remove = move |id: String| match team.try_update(|t| t.remove(&id)) {
        Some(Ok(user)) => notify(toasts, format!("{} removed", user.name), ToastKind::Info),
        Some(Err(e)) => notify(toasts, e.to_string(), ToastKind::Error),
        None => {}
    };

    view! {
        <section class="team-page">
            <div class="page-header">
                <h2>"Team Members"</h2>
                <button class="btn btn--primary" on:click=move |_| editing.set(Some(None))>
                    "+ Add New User"
                </button>
            </div>
            <table class="team-table">
                <thead>
                    <tr>
                        <th>"Full Name"</th>
                        <th>"Title"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Active"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        team.with(|t| t.members().to_vec())
                            .into_iter()
                            .map(|member| {
                                let edit_member = member.clone();
                                let toggle_id = member.id.clone();
                                let remove_id = member.id.clone();
                                let role_id = member.id.clone();
                                let current_role = member.role.clone();
                                let active = member.is_active;
                                view! {
                                    <tr>
                                        <td>
                                            <span class="avatar">{member.initials()}</span>
                                            {member.name}
                                        </td>
                                        <td>{member.title}</td>
                                        <td>{member.email}</td>
                                        <td>
                                            <select
                                                class="team-table__role"
                                                prop:value=member.role
                                                on:change=move |ev| change_role(role_id.clone(), event_target_value(&ev))
                                            >
                                                {role_choices(&current_role)
                                                    .into_iter()
                                                    .map(|role| {
                                                        let selected = role == current_role.trim();
                                                        let value = role.clone();
                                                        view! { <option value=value selected=selected>{role}</option> }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </td>
                                        <td>
                                            <button
                                                class=if active { "status status--active" } else { "status status--disabled" }
                                                on:click=move |_| set_active(toggle_id.clone(), !active)
                                            >
                                                {if active { "Active" } else { "Disabled" }}
                                            </button>
                                        </td>
                                        <td class="team-table__actions">
                                            <button class="btn btn--link" on:click=move |_| editing.set(Some(Some(edit_member.clone())))>
                                                "Edit"
                                            </button>
                                            <button class="btn btn--link btn--danger" on:click=move |_| remove(remove_id.clone())>
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            {move || editing.get().map(|user| view! { <AddUser user_data=user on_submit=on_submit on_close=on_close/> })}
        </section>
    }
}
