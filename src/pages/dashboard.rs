//! Dashboard page: stage totals, recent tasks, and roster summary.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::pages::tasks::TaskRow;
use crate::routes::{TASKS_PATH, TEAM_PATH, stage_path};
use crate::state::tasks::{StageCounts, TasksState};
use crate::state::team::TeamState;
use crate::types::TaskStage;

const RECENT_LIMIT: usize = 10;

/// Share of live tasks that are completed, as a whole percentage.
fn completion_rate(counts: StageCounts) -> usize {
    if counts.total == 0 { 0 } else { counts.completed * 100 / counts.total }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let tasks = expect_context::<RwSignal<TasksState>>();
    let team = expect_context::<RwSignal<TeamState>>();

    let counts = Memo::new(move |_| tasks.with(TasksState::stage_counts));
    let recent = move || tasks.with(|t| t.by_stage(None).into_iter().take(RECENT_LIMIT).cloned().collect::<Vec<_>>());
    let active_members = move || team.with(|t| t.members().iter().filter(|m| m.is_active).count());

    view! {
        <section class="dashboard">
            <div class="dashboard__cards">
                <a class="stat-card" href=TASKS_PATH>
                    <span class="stat-card__label">"Total Tasks"</span>
                    <span class="stat-card__value">{move || counts.get().total}</span>
                </a>
                {TaskStage::ALL
                    .into_iter()
                    .map(|stage| {
                        view! {
                            <a class="stat-card" href=stage_path(stage)>
                                <span class="stat-card__label">{stage.label()}</span>
                                <span class="stat-card__value">{move || counts.get().for_stage(stage)}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="dashboard__rate">{move || format!("{}% complete", completion_rate(counts.get()))}</p>
            <div class="dashboard__panels">
                <div class="panel">
                    <h2 class="panel__title">"Recent Tasks"</h2>
                    <Show when=move || { counts.get().total > 0 } fallback=|| view! { <p class="empty">"No tasks yet."</p> }>
                        <table class="task-table">
                            <tbody>{move || recent().into_iter().map(|task| view! { <TaskRow task=task/> }).collect_view()}</tbody>
                        </table>
                    </Show>
                </div>
                <a class="panel panel--link" href=TEAM_PATH>
                    <h2 class="panel__title">"Team"</h2>
                    <p>{move || format!("{} active members", active_members())}</p>
                </a>
            </div>
        </section>
    }
}
