//! Task list page, optionally filtered to one stage.
//!
//! Serves `/tasks` and the `/{stage}/:status` routes; the stage filter is
//! read back from the current path.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::add_task::{AddTask, save_task};
use crate::components::toaster::notify;
use crate::form::{FormValues, SubmitError};
use crate::pages::current_actor;
use crate::routes::{AppRoute, task_path};
use crate::state::session::SessionStore;
use crate::state::tasks::TasksState;
use crate::state::team::TeamState;
use crate::state::toast::{ToastKind, ToastQueue};
use crate::types::{Priority, Task, TaskStage};
use crate::util::clock::now_ms;

fn stage_filter(path: &str) -> Option<TaskStage> {
    match AppRoute::parse(path) {
        AppRoute::Tasks { stage, .. } => stage,
        _ => None,
    }
}

pub fn stage_class(stage: TaskStage) -> &'static str {
    match stage {
        TaskStage::Todo => "badge badge--todo",
        TaskStage::InProgress => "badge badge--in-progress",
        TaskStage::Completed => "badge badge--completed",
    }
}

fn priority_class(priority: Priority) -> String {
    format!("priority priority--{}", priority.as_str())
}

/// Read-only summary row linking to the task details page.
#[component]
pub fn TaskRow(task: Task, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <tr class="task-row">
            <td class="task-row__title">
                <a href=task_path(&task.id)>{task.title.clone()}</a>
            </td>
            <td>
                <span class=priority_class(task.priority)>{task.priority.as_str()}</span>
            </td>
            <td>
                <span class=stage_class(task.stage)>{task.stage.label()}</span>
            </td>
            <td class="task-row__progress">{format!("{}%", task.progress)}</td>
            <td class="task-row__due">{task.due_date.clone().unwrap_or_default()}</td>
            <td class="task-row__actions">{children.map(|c| c())}</td>
        </tr>
    }
}

#[component]
pub fn TasksPage() -> impl IntoView {
    let tasks = expect_context::<RwSignal<TasksState>>();
    let team = expect_context::<RwSignal<TeamState>>();
    let session = expect_context::<RwSignal<SessionStore>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let pathname = use_location().pathname;

    let stage = Memo::new(move |_| stage_filter(&pathname.get()));
    // `Some(None)` opens the create form, `Some(Some(task))` edits `task`.
    let editing = RwSignal::new(None::<Option<Task>>);

    let on_submit = Callback::new(move |values: FormValues| {
        let target = editing.with_untracked(|e| e.clone().flatten().map(|t| t.id));
        let actor = current_actor(session);
        let members = team.with_untracked(|t| t.members().to_vec());
        let result = tasks
            .try_update(|t| save_task(t, &members, target.as_deref(), &values, actor.as_deref(), now_ms()))
            .unwrap_or_else(|| Err(SubmitError::Rejected("task list is unavailable".to_owned())));
        if result.is_ok() {
            let message = if target.is_some() { "Task updated" } else { "Task created" };
            notify(toasts, message, ToastKind::Success);
        }
        result
    });
    let on_close = Callback::new(move |()| editing.set(None));

    let trash = move |id: String| {
        let actor = current_actor(session);
        let result = tasks.try_update(|t| t.trash(&id, actor.as_deref(), now_ms()));
        match result {
            Some(Ok(())) => notify(toasts, "Task moved to trash", ToastKind::Info),
            Some(Err(e)) => notify(toasts, e.to_string(), ToastKind::Error),
            None => {}
        }
    };

    let visible = move || tasks.with(|t| t.by_stage(stage.get()).into_iter().cloned().collect::<Vec<_>>());

    view! {
        <section class="tasks-page">
            <div class="page-header">
                <h2>{move || stage.get().map_or("Tasks", TaskStage::label)}</h2>
                <button class="btn btn--primary" on:click=move |_| editing.set(Some(None))>
                    "+ Create Task"
                </button>
            </div>
            <table class="task-table">
                <thead>
                    <tr>
                        <th>"Task Title"</th>
                        <th>"Priority"</th>
                        <th>"Stage"</th>
                        <th>"Progress"</th>
                        <th>"Due"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        visible()
                            .into_iter()
                            .map(|task| {
                                let id = task.id.clone();
                                let edit_task = task.clone();
                                view! {
                                    <TaskRow task=task>
                                        <button class="btn btn--link" on:click=move |_| editing.set(Some(Some(edit_task.clone())))>
                                            "Edit"
                                        </button>
                                        <button class="btn btn--link btn--danger" on:click=move |_| trash(id.clone())>
                                            "Delete"
                                        </button>
                                    </TaskRow>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <Show when=move || visible().is_empty()>
                <p class="empty">"No tasks here."</p>
            </Show>
            {move || editing.get().map(|task| view! { <AddTask task=task on_submit=on_submit on_close=on_close/> })}
        </section>
    }
}
