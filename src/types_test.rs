use super::*;

// =============================================================
// UserRef
// =============================================================

#[test]
fn user_ref_defaults_active_when_field_missing() {
    let user: UserRef = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "name": "Ada Lovelace",
        "title": "Engineer",
        "email": "ada@example.com",
        "role": "Admin"
    }))
    .unwrap();
    assert!(user.is_active);
}

#[test]
fn user_ref_initials_take_first_two_words() {
    let user = UserRef {
        id: "u1".to_owned(),
        name: "ada byron lovelace".to_owned(),
        title: String::new(),
        email: String::new(),
        role: String::new(),
        is_active: true,
    };
    assert_eq!(user.initials(), "AB");
}

// =============================================================
// TaskStage
// =============================================================

#[test]
fn task_stage_segments_round_trip() {
    for stage in TaskStage::ALL {
        assert_eq!(TaskStage::from_segment(stage.segment()), Some(stage));
    }
    assert_eq!(TaskStage::from_segment("done"), None);
}

#[test]
fn task_stage_serializes_snake_case() {
    assert_eq!(serde_json::to_value(TaskStage::InProgress).unwrap(), serde_json::json!("in_progress"));
}

// =============================================================
// Priority
// =============================================================

#[test]
fn priority_parse_is_case_insensitive() {
    assert_eq!(Priority::parse(" HIGH "), Some(Priority::High));
    assert_eq!(Priority::parse("urgent"), None);
}

#[test]
fn priority_default_is_normal() {
    assert_eq!(Priority::default(), Priority::Normal);
}
