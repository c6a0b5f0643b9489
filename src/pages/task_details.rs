//! Task details page: stage, progress, assignees, and activity history.

#[cfg(test)]
#[path = "task_details_test.rs"]
mod task_details_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::textbox::{FormHandle, Textbox};
use crate::components::toaster::notify;
use crate::config::ClientConfig;
use crate::form::rules::parse_percent;
use crate::form::{FieldDescriptor, FormOptions, FormState, FormValues, InputKind, Rule, SubmitError, SubmitOutcome};
use crate::pages::current_actor;
use crate::pages::tasks::stage_class;
use crate::routes::TASKS_PATH;
use crate::state::session::SessionStore;
use crate::state::tasks::TasksState;
use crate::state::team::TeamState;
use crate::state::toast::{ToastKind, ToastQueue};
use crate::types::{Activity, TaskStage, UserRef};
use crate::util::clock::now_ms;

pub fn progress_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("progress", "Progress (%)")
            .kind(InputKind::Number)
            .placeholder("0-100")
            .rule(Rule::required("Progress is required!"))
            .rule(Rule::percent_range("Progress must be a whole number from 0 to 100")),
    ]
}

/// Store a submitted progress value on task `id`.
///
/// # Errors
///
/// Store failures reject the form; an unparsable value is reported on the
/// progress field.
pub fn apply_progress(
    tasks: &mut TasksState,
    id: &str,
    values: &FormValues,
    actor: Option<&str>,
    now_ms: f64,
) -> Result<(), SubmitError> {
    let Some(progress) = parse_percent(values.text("progress")) else {
        return Err(SubmitError::Field {
            field: "progress".to_owned(),
            message: "Progress must be a whole number from 0 to 100".to_owned(),
        });
    };
    tasks
        .update_progress(id, i32::from(progress), actor, now_ms)
        .map_err(|e| SubmitError::Rejected(e.to_string()))
}

/// Add `member_id` to the assignees, or remove it when already present.
pub fn toggle_assignee(current: &[String], member_id: &str) -> Vec<String> {
    if current.iter().any(|id| id == member_id) {
        current.iter().filter(|id| *id != member_id).cloned().collect()
    } else {
        let mut next = current.to_vec();
        next.push(member_id.to_owned());
        next
    }
}

/// One-line summary of an activity entry, naming the actor when known.
pub fn activity_line(activity: &Activity, members: &[UserRef]) -> String {
    let by = activity
        .by
        .as_deref()
        .map(|id| members.iter().find(|m| m.id == id).map_or(id, |m| m.name.as_str()));
    match by {
        Some(name) => format!("{} by {}: {}", activity.kind.label(), name, activity.detail),
        None => format!("{}: {}", activity.kind.label(), activity.detail),
    }
}

#[component]
pub fn TaskDetailsPage() -> impl IntoView {
    let tasks = expect_context::<RwSignal<TasksState>>();
    let team = expect_context::<RwSignal<TeamState>>();
    let session = expect_context::<RwSignal<SessionStore>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let params = use_params_map();

    let task_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let task = move || tasks.with(|t| t.get(&task_id.get()).cloned());

    view! {
        <section class="task-details">
            {move || match task() {
                None => {
                    view! {
                        <div class="empty">
                            <p>"Task not found."</p>
                            <a href=TASKS_PATH>"Back to tasks"</a>
                        </div>
                    }
                        .into_any()
                }
                Some(current) => {
                    let id = current.id.clone();
                    let change_stage = move |to: TaskStage| {
                        let actor = current_actor(session);
                        match tasks.try_update(|t| t.change_stage(&id, to, actor.as_deref(), None, now_ms())) {
                            Some(Ok(())) => notify(toasts, format!("Moved to {}", to.label()), ToastKind::Success),
                            Some(Err(e)) => notify(toasts, e.to_string(), ToastKind::Error),
                            None => {}
                        }
                    };
                    let id = current.id.clone();
                    let assignees = current.assignees.clone();
                    let toggle = move |member_id: String| {
                        let actor = current_actor(session);
                        let members = team.with_untracked(|t| t.members().to_vec());
                        let next = toggle_assignee(&assignees, &member_id);
                        match tasks.try_update(|t| t.assign(&id, next, &members, actor.as_deref(), now_ms())) {
                            Some(Ok(())) => notify(toasts, "Assignees updated", ToastKind::Success),
                            Some(Err(e)) => notify(toasts, e.to_string(), ToastKind::Error),
                            None => {}
                        }
                    };
                    let members = team.with_untracked(|t| t.members().to_vec());
                    let history = current
                        .activities
                        .iter()
                        .rev()
                        .map(|a| view! { <li class="activity">{activity_line(a, &members)}</li> })
                        .collect_view();

                    view! {
                        <header class="task-details__header">
                            <h2>{current.title.clone()}</h2>
                            <span class=stage_class(current.stage)>{current.stage.label()}</span>
                            <span class="task-details__priority">{current.priority.as_str()}</span>
                        </header>
                        <dl class="task-details__meta">
                            <dt>"Start"</dt>
                            <dd>{current.date.clone().unwrap_or_else(|| "-".to_owned())}</dd>
                            <dt>"Due"</dt>
                            <dd>{current.due_date.clone().unwrap_or_else(|| "-".to_owned())}</dd>
                            <dt>"Progress"</dt>
                            <dd>{format!("{}%", current.progress)}</dd>
                        </dl>
                        <div class="task-details__stages">
                            {TaskStage::ALL
                                .into_iter()
                                .filter(|stage| *stage != current.stage)
                                .map(|stage| {
                                    let change_stage = change_stage.clone();
                                    view! {
                                        <button class="btn" on:click=move |_| change_stage(stage)>
                                            {format!("Move to {}", stage.label())}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <ProgressForm task_id=current.id.clone() progress=current.progress/>
                        <div class="task-details__team">
                            <h3>"Assignees"</h3>
                            {members
                                .iter()
                                .filter(|m| m.is_active)
                                .map(|m| {
                                    let member_id = m.id.clone();
                                    let checked = current.assignees.contains(&m.id);
                                    let toggle = toggle.clone();
                                    view! {
                                        <label class="assignee">
                                            <input type="checkbox" prop:checked=checked on:change=move |_| toggle(member_id.clone())/>
                                            {m.name.clone()}
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="task-details__activity">
                            <h3>"Activities"</h3>
                            <ul>{history}</ul>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn ProgressForm(task_id: String, progress: u8) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let tasks = expect_context::<RwSignal<TasksState>>();
    let session = expect_context::<RwSignal<SessionStore>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    let defaults = FormValues::new().with("progress", progress.to_string());
    let form = RwSignal::new(FormState::new(
        progress_fields(),
        Some(&defaults),
        FormOptions { validate_on_blur: config.validate_on_blur },
    ));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let actor = current_actor(session);
        let id = task_id.clone();
        let handler = move |values: &FormValues| -> Result<(), SubmitError> {
            tasks
                .try_update(|t| apply_progress(t, &id, values, actor.as_deref(), now_ms()))
                .unwrap_or_else(|| Err(SubmitError::Rejected("task list is unavailable".to_owned())))
        };
        match form.try_update(|f| f.submit(&handler)) {
            Some(SubmitOutcome::Submitted(_)) => notify(toasts, "Progress updated", ToastKind::Success),
            Some(SubmitOutcome::Rejected(SubmitError::Rejected(message))) => notify(toasts, message, ToastKind::Error),
            _ => {}
        }
    };

    view! {
        <form class="progress-form" on:submit=on_submit>
            {FormHandle::all(form).into_iter().map(|field| view! { <Textbox field=field/> }).collect_view()}
            <button class="btn btn--primary" type="submit">
                "Save"
            </button>
        </form>
    }
}
