//! Create/update form for tasks.

#[cfg(test)]
#[path = "add_task_test.rs"]
mod add_task_test;

use leptos::prelude::*;

use crate::components::modal::ModalWrapper;
use crate::components::textbox::{FormHandle, Textbox};
use crate::components::toaster::notify;
use crate::config::ClientConfig;
use crate::form::{
    FieldDescriptor, FormMode, FormOptions, FormState, FormValues, InputKind, Rule, SubmitError, SubmitOutcome,
};
use crate::state::tasks::{TaskDraft, TaskError, TasksState};
use crate::state::toast::{ToastKind, ToastQueue};
use crate::types::{Priority, Task, TaskStage, UserRef};

const STAGE_OPTIONS: &[(&str, &str)] = &[("todo", "To Do"), ("in-progress", "In Progress"), ("completed", "Completed")];

const PRIORITY_OPTIONS: &[(&str, &str)] = &[("high", "High"), ("medium", "Medium"), ("normal", "Normal"), ("low", "Low")];

pub fn task_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("title", "Task Title")
            .placeholder("Task title")
            .rule(Rule::required("Title is required!"))
            .rule(Rule::max_length(120, "Title must be at most 120 characters")),
        FieldDescriptor::new("stage", "Task Stage").options(STAGE_OPTIONS).initial("todo"),
        FieldDescriptor::new("priority", "Priority Level").options(PRIORITY_OPTIONS).initial("normal"),
        FieldDescriptor::new("date", "Task Date")
            .kind(InputKind::Date)
            .rule(Rule::required("Date is required!"))
            .rule(Rule::iso_date("Use the YYYY-MM-DD format")),
        FieldDescriptor::new("due_date", "Due Date")
            .kind(InputKind::Date)
            .rule(Rule::iso_date("Use the YYYY-MM-DD format")),
    ]
}

pub fn form_title(mode: FormMode) -> &'static str {
    match mode {
        FormMode::Create => "ADD TASK",
        FormMode::Update => "UPDATE TASK",
    }
}

pub fn task_defaults(task: &Task) -> FormValues {
    FormValues::new()
        .with("title", task.title.as_str())
        .with("stage", task.stage.segment())
        .with("priority", task.priority.as_str())
        .with("date", task.date.clone().unwrap_or_default())
        .with("due_date", task.due_date.clone().unwrap_or_default())
}

fn optional(values: &FormValues, name: &str) -> Option<String> {
    let raw = values.text(name).trim();
    (!raw.is_empty()).then(|| raw.to_owned())
}

/// Build a draft from submitted values. Select fields that somehow hold an
/// unknown value fall back to the defaults.
pub fn task_draft(values: &FormValues, assignees: Vec<String>) -> TaskDraft {
    TaskDraft {
        title: values.text("title").to_owned(),
        stage: TaskStage::from_segment(values.text("stage")).unwrap_or_default(),
        priority: Priority::parse(values.text("priority")).unwrap_or_default(),
        date: optional(values, "date"),
        due_date: optional(values, "due_date"),
        assignees,
    }
}

fn submit_error(err: TaskError) -> SubmitError {
    match err {
        TaskError::DueBeforeStart => SubmitError::Field { field: "due_date".to_owned(), message: err.to_string() },
        other => SubmitError::Rejected(other.to_string()),
    }
}

/// Apply a submitted task form. `target` is the id being edited, or `None`
/// to create a task. Edits keep the task's current assignees.
///
/// # Errors
///
/// An out-of-order due date is reported against the due date field; other
/// store failures reject the whole form.
pub fn save_task(
    tasks: &mut TasksState,
    members: &[UserRef],
    target: Option<&str>,
    values: &FormValues,
    actor: Option<&str>,
    now_ms: f64,
) -> Result<(), SubmitError> {
    match target {
        Some(id) => {
            let assignees = tasks.get(id).map(|t| t.assignees.clone()).unwrap_or_default();
            tasks.update(id, task_draft(values, assignees), members, actor, now_ms)
        }
        None => tasks.create(task_draft(values, Vec::new()), members, actor, now_ms).map(|_| ()),
    }
    .map_err(submit_error)
}

#[component]
pub fn AddTask(
    task: Option<Task>,
    on_submit: Callback<FormValues, Result<(), SubmitError>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    let defaults = task.as_ref().map(task_defaults);
    let form = RwSignal::new(FormState::new(
        task_fields(),
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
