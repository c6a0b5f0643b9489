use super::*;
use crate::state::team::TeamState;

const NOW: f64 = 1_700_000_000_000.0;

fn filled() -> FormValues {
    FormValues::new()
        .with("title", "Ship release")
        .with("stage", "in-progress")
        .with("priority", "high")
        .with("date", "2024-03-01")
        .with("due_date", "")
}

#[test]
fn draft_parses_selects_and_blank_dates() {
    let draft = task_draft(&filled(), vec!["u1".to_owned()]);
    assert_eq!(draft.title, "Ship release");
    assert_eq!(draft.stage, TaskStage::InProgress);
    assert_eq!(draft.priority, Priority::High);
    assert_eq!(draft.date.as_deref(), Some("2024-03-01"));
    assert_eq!(draft.due_date, None);
    assert_eq!(draft.assignees, vec!["u1".to_owned()]);
}

#[test]
fn new_form_starts_from_select_initials() {
    let form = FormState::new(task_fields(), None, FormOptions::default());
    assert_eq!(form.value("stage"), Some("todo"));
    assert_eq!(form.value("priority"), Some("normal"));
    assert_eq!(form_title(form.mode()), "ADD TASK");
}

#[test]
fn defaults_reflect_existing_task() {
    let mut tasks = TasksState::default();
    save_task(&mut tasks, &[], None, &filled(), Some("u1"), NOW).expect("create");
    let task = tasks.tasks()[0].clone();
    let defaults = task_defaults(&task);
    assert_eq!(defaults.text("stage"), "in-progress");
    assert_eq!(defaults.text("priority"), "high");
    assert_eq!(defaults.text("due_date"), "");
}

#[test]
fn due_before_start_is_a_due_date_field_error() {
    let mut form = FormState::new(task_fields(), None, FormOptions::default());
    for (name, value) in filled().with("due_date", "2024-02-01").iter() {
        form.input(name, value);
    }
    let tasks = std::cell::RefCell::new(TasksState::default());
    let handler = |v: &FormValues| save_task(&mut tasks.borrow_mut(), &[], None, v, None, NOW);
    assert!(matches!(form.submit(&handler), SubmitOutcome::Rejected(SubmitError::Field { .. })));
    assert_eq!(form.error("due_date"), Some("due date cannot be before the start date"));
    assert!(tasks.borrow().tasks().is_empty());
}

#[test]
fn malformed_date_blocks_submit() {
    let mut form = FormState::new(task_fields(), None, FormOptions::default());
    form.input("title", "x");
    form.input("date", "03/01/2024");
    let handler = |_: &FormValues| -> Result<(), SubmitError> { Ok(()) };
    assert!(matches!(form.submit(&handler), SubmitOutcome::Blocked(_)));
    assert_eq!(form.error("date"), Some("Use the YYYY-MM-DD format"));
}

#[test]
fn editing_keeps_assignees_and_changes_stage() {
    let members = vec![UserRef {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        title: "Dev".to_owned(),
        email: "ada@example.com".to_owned(),
        role: "Member".to_owned(),
        is_active: true,
    }];
    let mut tasks = TasksState::default();
    save_task(&mut tasks, &members, None, &filled(), None, NOW).expect("create");
    let id = tasks.tasks()[0].id.clone();
    tasks.assign(&id, vec!["u1".to_owned()], &members, None, NOW).expect("assign");

    let edited = filled().with("stage", "completed");
    save_task(&mut tasks, &members, Some(&id), &edited, None, NOW + 1.0).expect("update");
    let task = tasks.get(&id).expect("task");
    assert_eq!(task.assignees, vec!["u1".to_owned()]);
    assert_eq!(task.stage, TaskStage::Completed);
    assert_eq!(task.progress, 100);
}

#[test]
fn editing_after_assignee_deactivated_still_saves() {
    let mut team = TeamState::default();
    let ada = UserRef {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        title: "Dev".to_owned(),
        email: "ada@example.com".to_owned(),
        role: "Member".to_owned(),
        is_active: true,
    };
    team.ensure_member(&ada);
    let mut tasks = TasksState::default();
    save_task(&mut tasks, team.members(), None, &filled(), None, NOW).expect("create");
    let id = tasks.tasks()[0].id.clone();
    tasks.assign(&id, vec!["u1".to_owned()], team.members(), None, NOW).expect("assign");
    team.set_active("u1", false).expect("deactivate");

    let renamed = filled().with("title", "Renamed");
    save_task(&mut tasks, team.members(), Some(&id), &renamed, None, NOW + 1.0).expect("update");
    let task = tasks.get(&id).expect("task");
    assert_eq!(task.title, "Renamed");
    assert_eq!(task.assignees, vec!["u1".to_owned()]);
}

#[test]
fn editing_missing_task_rejects_form() {
    let mut tasks = TasksState::default();
    let err = save_task(&mut tasks, &[], Some("nope"), &filled(), None, NOW).unwrap_err();
    assert_eq!(err, SubmitError::Rejected("task nope not found".to_owned()));
}
