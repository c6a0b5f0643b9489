use super::*;

const NOW: f64 = 1_700_000_000_000.0;

fn member(id: &str, active: bool) -> UserRef {
    UserRef {
        id: id.to_owned(),
        name: id.to_owned(),
        title: "Dev".to_owned(),
        email: format!("{id}@example.com"),
        role: "Member".to_owned(),
        is_active: active,
    }
}

fn draft(title: &str) -> TaskDraft {
    TaskDraft { title: title.to_owned(), ..TaskDraft::default() }
}

fn store_with(title: &str) -> (TasksState, String) {
    let mut store = TasksState::default();
    let id = store.create(draft(title), &[], Some("u1"), NOW).unwrap();
    (store, id)
}

// =============================================================
// create
// =============================================================

#[test]
fn create_inserts_newest_first_with_history() {
    let mut store = TasksState::default();
    let first = store.create(draft("first"), &[], None, NOW).unwrap();
    let second = store.create(draft("  second "), &[], Some("u1"), NOW).unwrap();
    assert_eq!(store.tasks()[0].id, second);
    assert_eq!(store.tasks()[1].id, first);
    let task = store.get(&second).unwrap();
    assert_eq!(task.title, "second");
    assert_eq!(task.progress, 0);
    assert_eq!(task.activities.len(), 1);
    assert_eq!(task.activities[0].kind, ActivityKind::Created);
    assert_eq!(task.activities[0].by.as_deref(), Some("u1"));
}

#[test]
fn create_rejects_due_before_start() {
    let mut store = TasksState::default();
    let bad = TaskDraft {
        date: Some("2024-05-02".to_owned()),
        due_date: Some("2024-05-01".to_owned()),
        ..draft("t")
    };
    assert_eq!(store.create(bad, &[], None, NOW), Err(TaskError::DueBeforeStart));
    assert!(store.tasks().is_empty());
}

#[test]
fn create_rejects_inactive_or_unknown_assignee() {
    let mut store = TasksState::default();
    let members = [member("a", true), member("b", false)];
    let ok = TaskDraft { assignees: vec!["a".to_owned()], ..draft("t") };
    assert!(store.create(ok, &members, None, NOW).is_ok());
    let inactive = TaskDraft { assignees: vec!["b".to_owned()], ..draft("t") };
    assert_eq!(store.create(inactive, &members, None, NOW), Err(TaskError::InactiveAssignee("b".to_owned())));
    let unknown = TaskDraft { assignees: vec!["z".to_owned()], ..draft("t") };
    assert_eq!(store.create(unknown, &members, None, NOW), Err(TaskError::InactiveAssignee("z".to_owned())));
}

#[test]
fn create_in_completed_stage_is_fully_done() {
    let mut store = TasksState::default();
    let id = store.create(TaskDraft { stage: TaskStage::Completed, ..draft("t") }, &[], None, NOW).unwrap();
    let task = store.get(&id).unwrap();
    assert_eq!(task.progress, 100);
    assert_eq!(task.completed_at_ms, Some(NOW));
}

// =============================================================
// Stage and progress
// =============================================================

#[test]
fn completing_sets_progress_and_timestamp() {
    let (mut store, id) = store_with("t");
    store.change_stage(&id, TaskStage::Completed, None, Some("done"), NOW).unwrap();
    let task = store.get(&id).unwrap();
    assert_eq!(task.stage, TaskStage::Completed);
    assert_eq!(task.progress, 100);
    assert_eq!(task.completed_at_ms, Some(NOW));
    let last = task.activities.last().unwrap();
    assert_eq!(last.kind, ActivityKind::StageChanged);
    assert_eq!(last.detail, "todo->completed, note=done");
}

#[test]
fn leaving_completed_clears_timestamp() {
    let (mut store, id) = store_with("t");
    store.change_stage(&id, TaskStage::Completed, None, None, NOW).unwrap();
    store.change_stage(&id, TaskStage::InProgress, None, None, NOW + 1.0).unwrap();
    assert_eq!(store.get(&id).unwrap().completed_at_ms, None);
}

#[test]
fn same_stage_change_is_rejected() {
    let (mut store, id) = store_with("t");
    assert_eq!(store.change_stage(&id, TaskStage::Todo, None, None, NOW), Err(TaskError::SameStage(TaskStage::Todo)));
    assert_eq!(
        TaskError::SameStage(TaskStage::InProgress).to_string(),
        "task is already in In Progress"
    );
}

#[test]
fn progress_bounds_and_completion_stamp() {
    let (mut store, id) = store_with("t");
    assert_eq!(store.update_progress(&id, 101, None, NOW), Err(TaskError::ProgressOutOfRange(101)));
    assert_eq!(store.update_progress(&id, -1, None, NOW), Err(TaskError::ProgressOutOfRange(-1)));

    store.update_progress(&id, 100, None, NOW).unwrap();
    assert_eq!(store.get(&id).unwrap().completed_at_ms, Some(NOW));
    // A second 100 keeps the original stamp.
    store.update_progress(&id, 100, None, NOW + 5.0).unwrap();
    assert_eq!(store.get(&id).unwrap().completed_at_ms, Some(NOW));

    store.update_progress(&id, 40, None, NOW).unwrap();
    let task = store.get(&id).unwrap();
    assert_eq!(task.progress, 40);
    assert_eq!(task.completed_at_ms, None);
}

#[test]
fn unknown_task_is_not_found() {
    let mut store = TasksState::default();
    assert_eq!(store.update_progress("nope", 10, None, NOW), Err(TaskError::NotFound("nope".to_owned())));
    assert_eq!(store.trash("nope", None, NOW), Err(TaskError::NotFound("nope".to_owned())));
}

// =============================================================
// update and assign
// =============================================================

#[test]
fn update_replaces_fields_and_routes_stage_change() {
    let (mut store, id) = store_with("t");
    let edit = TaskDraft {
        title: "renamed".to_owned(),
        stage: TaskStage::Completed,
        priority: Priority::High,
        date: Some("2024-01-01".to_owned()),
        due_date: Some("2024-01-02".to_owned()),
        assignees: Vec::new(),
    };
    store.update(&id, edit, &[], None, NOW).unwrap();
    let task = store.get(&id).unwrap();
    assert_eq!(task.title, "renamed");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.progress, 100);
    let kinds: Vec<ActivityKind> = task.activities.iter().map(|a| a.kind).collect();
    assert_eq!(kinds, vec![ActivityKind::Created, ActivityKind::StageChanged, ActivityKind::Updated]);
}

#[test]
fn update_keeps_deactivated_existing_assignee() {
    let (mut store, id) = store_with("t");
    let mut members = vec![member("a", true), member("b", true)];
    store.assign(&id, vec!["a".to_owned()], &members, None, NOW).unwrap();
    members[0].is_active = false;

    let edit = TaskDraft { assignees: vec!["a".to_owned()], ..draft("renamed") };
    store.update(&id, edit, &members, None, NOW).unwrap();
    assert_eq!(store.get(&id).unwrap().title, "renamed");
    assert_eq!(store.get(&id).unwrap().assignees, vec!["a".to_owned()]);

    members[1].is_active = false;
    let edit = TaskDraft { assignees: vec!["a".to_owned(), "b".to_owned()], ..draft("again") };
    assert_eq!(store.update(&id, edit, &members, None, NOW), Err(TaskError::InactiveAssignee("b".to_owned())));
    assert_eq!(store.get(&id).unwrap().title, "renamed");
}

#[test]
fn assign_checks_membership() {
    let (mut store, id) = store_with("t");
    let members = [member("a", true)];
    store.assign(&id, vec!["a".to_owned()], &members, None, NOW).unwrap();
    assert_eq!(store.get(&id).unwrap().assignees, vec!["a".to_owned()]);
    assert!(store.assign(&id, vec!["b".to_owned()], &members, None, NOW).is_err());
}

// =============================================================
// Trash
// =============================================================

#[test]
fn trash_and_restore_round_trip() {
    let (mut store, id) = store_with("t");
    store.trash(&id, None, NOW).unwrap();
    assert!(store.by_stage(None).is_empty());
    assert_eq!(store.trashed().len(), 1);
    assert_eq!(store.stage_counts().total, 0);

    store.restore(&id, None, NOW).unwrap();
    assert_eq!(store.by_stage(None).len(), 1);
    assert_eq!(store.restore(&id, None, NOW), Err(TaskError::NotTrashed(id.clone())));
}

#[test]
fn delete_forever_requires_trash() {
    let (mut store, id) = store_with("t");
    assert_eq!(store.delete_forever(&id), Err(TaskError::NotTrashed(id.clone())));
    store.trash(&id, None, NOW).unwrap();
    store.delete_forever(&id).unwrap();
    assert!(store.get(&id).is_none());
}

#[test]
fn bulk_restore_and_empty() {
    let mut store = TasksState::default();
    let ids: Vec<String> = (0..3).map(|i| store.create(draft(&format!("t{i}")), &[], None, NOW).unwrap()).collect();
    store.trash(&ids[0], None, NOW).unwrap();
    store.trash(&ids[1], None, NOW).unwrap();
    assert_eq!(store.restore_all(None, NOW), 2);
    assert!(store.trashed().is_empty());

    store.trash(&ids[2], None, NOW).unwrap();
    assert_eq!(store.empty_trash(), 1);
    assert_eq!(store.tasks().len(), 2);
}

// =============================================================
// Queries
// =============================================================

#[test]
fn stage_filter_and_counts() {
    let mut store = TasksState::default();
    store.create(draft("a"), &[], None, NOW).unwrap();
    store.create(TaskDraft { stage: TaskStage::InProgress, ..draft("b") }, &[], None, NOW).unwrap();
    store.create(TaskDraft { stage: TaskStage::Completed, ..draft("c") }, &[], None, NOW).unwrap();

    assert_eq!(store.by_stage(Some(TaskStage::InProgress)).len(), 1);
    assert_eq!(store.by_stage(None).len(), 3);
    let counts = store.stage_counts();
    assert_eq!(counts, StageCounts { total: 3, todo: 1, in_progress: 1, completed: 1 });
    assert_eq!(counts.for_stage(TaskStage::Completed), 1);
}
