//! Trash page: restore or permanently delete trashed tasks.

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::pages::current_actor;
use crate::pages::tasks::stage_class;
use crate::state::session::SessionStore;
use crate::state::tasks::TasksState;
use crate::state::toast::{ToastKind, ToastQueue};
use crate::util::clock::now_ms;

fn plural(count: usize) -> &'static str {
    if count == 1 { "task" } else { "tasks" }
}

#[component]
pub fn TrashPage() -> impl IntoView {
    let tasks = expect_context::<RwSignal<TasksState>>();
    let session = expect_context::<RwSignal<SessionStore>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    let trashed = move || tasks.with(|t| t.trashed().into_iter().cloned().collect::<Vec<_>>());

    let restore = move |id: String| {
        let actor = current_actor(session);
        match tasks.try_update(|t| t.restore(&id, actor.as_deref(), now_ms())) {
            Some(Ok(())) => notify(toasts, "Task restored", ToastKind::Success),
            Some(Err(e)) => notify(toasts, e.to_string(), ToastKind::Error),
            None => {}
        }
    };

    let delete = move |id: String| match tasks.try_update(|t| t.delete_forever(&id)) {
        Some(Ok(())) => notify(toasts, "Task deleted", ToastKind::Info),
        Some(Err(e)) => notify(toasts, e.to_string(), ToastKind::Error),
        None => {}
    };

    let restore_all = move |_| {
        let actor = current_actor(session);
        let count = tasks.try_update(|t| t.restore_all(actor.as_deref(), now_ms())).unwrap_or_default();
        notify(toasts, format!("{count} {} restored", plural(count)), ToastKind::Success);
    };

    let empty_trash = move |_| {
        let count = tasks.try_update(TasksState::empty_trash).unwrap_or_default();
        notify(toasts, format!("{count} {} deleted", plural(count)), ToastKind::Info);
    };

    view! {
        <section class="trash-page">
            <div class="page-header">
                <h2>"Trashed Tasks"</h2>
                <div class="page-header__actions">
                    <button class="btn" on:click=restore_all disabled=move || trashed().is_empty()>
                        "Restore All"
                    </button>
                    <button class="btn btn--danger" on:click=empty_trash disabled=move || trashed().is_empty()>
                        "Delete All"
                    </button>
                </div>
            </div>
            <Show when=move || !trashed().is_empty() fallback=|| view! { <p class="empty">"Trash is empty."</p> }>
                <table class="task-table">
                    <tbody>
                        {move || {
                            trashed()
                                .into_iter()
                                .map(|task| {
                                    let restore_id = task.id.clone();
                                    let delete_id = task.id.clone();
                                    view! {
                                        <tr>
                                            <td>{task.title}</td>
                                            <td>
                                                <span class=stage_class(task.stage)>{task.stage.label()}</span>
                                            </td>
                                            <td>{task.priority.as_str()}</td>
                                            <td class="task-row__actions">
                                                <button class="btn btn--link" on:click=move |_| restore(restore_id.clone())>
                                                    "Restore"
                                                </button>
                                                <button class="btn btn--link btn--danger" on:click=move |_| delete(delete_id.clone())>
                                                    "Delete forever"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
