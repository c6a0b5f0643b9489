use super::*;
use crate::state::tasks::TaskDraft;
use crate::types::ActivityKind;

const NOW: f64 = 1_700_000_000_000.0;

fn store() -> (TasksState, String) {
    let mut tasks = TasksState::default();
    let id = tasks
        .create(TaskDraft { title: "Write docs".to_owned(), ..TaskDraft::default() }, &[], None, NOW)
        .expect("create");
    (tasks, id)
}

// =============================================================
// Progress
// =============================================================

#[test]
fn progress_form_rejects_out_of_range_values() {
    let mut form = FormState::new(progress_fields(), None, FormOptions::default());
    form.input("progress", "150");
    let handler = |_: &FormValues| -> Result<(), SubmitError> { Ok(()) };
    assert!(matches!(form.submit(&handler), SubmitOutcome::Blocked(_)));
    assert_eq!(form.error("progress"), Some("Progress must be a whole number from 0 to 100"));
}

#[test]
fn apply_progress_records_activity() {
    let (mut tasks, id) = store();
    let values = FormValues::new().with("progress", "100");
    apply_progress(&mut tasks, &id, &values, Some("u1"), NOW + 5.0).expect("progress");
    let task = tasks.get(&id).expect("task");
    assert_eq!(task.progress, 100);
    assert_eq!(task.completed_at_ms, Some(NOW + 5.0));
    assert_eq!(task.activities.last().map(|a| a.kind), Some(ActivityKind::ProgressUpdated));
}

#[test]
fn apply_progress_on_missing_task_rejects() {
    let (mut tasks, _) = store();
    let values = FormValues::new().with("progress", "10");
    let err = apply_progress(&mut tasks, "missing", &values, None, NOW).unwrap_err();
    assert!(matches!(err, SubmitError::Rejected(_)));
}

// =============================================================
// Assignees and history
// =============================================================

#[test]
fn toggle_assignee_adds_and_removes() {
    let none: Vec<String> = Vec::new();
    let one = toggle_assignee(&none, "u1");
    assert_eq!(one, vec!["u1".to_owned()]);
    let two = toggle_assignee(&one, "u2");
    assert_eq!(two, vec!["u1".to_owned(), "u2".to_owned()]);
    assert_eq!(toggle_assignee(&two, "u1"), vec!["u2".to_owned()]);
}

#[test]
fn activity_line_prefers_member_names() {
    let members = vec![UserRef {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        title: "Dev".to_owned(),
        email: "ada@example.com".to_owned(),
        role: "Member".to_owned(),
        is_active: true,
    }];
    let mut activity = Activity {
        id: "a1".to_owned(),
        kind: ActivityKind::ProgressUpdated,
        detail: "progress=40".to_owned(),
        by: Some("u1".to_owned()),
        at_ms: NOW,
    };
    assert!(activity_line(&activity, &members).ends_with("by Ada: progress=40"));

    activity.by = Some("ghost".to_owned());
    assert!(activity_line(&activity, &members).contains("by ghost"));

    activity.by = None;
    assert!(!activity_line(&activity, &members).contains(" by "));
}
