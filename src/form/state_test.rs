use std::cell::RefCell;

use super::*;
use crate::form::field::InputKind;
use crate::form::rules::Rule;

const REQUIRED_EMAIL: &str = "Email address is required!";
const BAD_EMAIL: &str = "Enter a valid email address";

fn email_form(options: FormOptions) -> FormState {
    let email = FieldDescriptor::new("email", "Email")
        .kind(InputKind::Email)
        .rule(Rule::required(REQUIRED_EMAIL))
        .rule(Rule::email(BAD_EMAIL));
    FormState::new(vec![email], None, options)
}

fn accept_all(_: &FormValues) -> Result<(), SubmitError> {
    Ok(())
}

// =============================================================
// Submit gating
// =============================================================

#[test]
fn empty_required_field_blocks_submit() {
    let mut form = email_form(FormOptions::default());
    let called = RefCell::new(false);
    let handler = |_: &FormValues| -> Result<(), SubmitError> {
        *called.borrow_mut() = true;
        Ok(())
    };
    let outcome = form.submit(&handler);
    assert_eq!(
        outcome,
        SubmitOutcome::Blocked(vec![("email", ValidationError::Required(REQUIRED_EMAIL.to_owned()))])
    );
    assert_eq!(form.error("email"), Some(REQUIRED_EMAIL));
    assert!(!*called.borrow());
}

#[test]
fn malformed_email_blocks_with_format_message() {
    let mut form = email_form(FormOptions::default());
    form.input("email", "not-an-email");
    let outcome = form.submit(&accept_all);
    assert!(matches!(outcome, SubmitOutcome::Blocked(_)));
    assert_eq!(form.error("email"), Some(BAD_EMAIL));
}

#[test]
fn valid_email_submits_exact_value() {
    let mut form = email_form(FormOptions::default());
    form.input("email", "a@b.com");
    let seen = RefCell::new(None);
    let handler = |values: &FormValues| -> Result<(), SubmitError> {
        *seen.borrow_mut() = values.get("email").map(str::to_owned);
        Ok(())
    };
    let outcome = form.submit(&handler);
    assert_eq!(outcome, SubmitOutcome::Submitted(FormValues::new().with("email", "a@b.com")));
    assert_eq!(seen.borrow().as_deref(), Some("a@b.com"));
    assert_eq!(form.error("email"), None);
}

#[test]
fn handler_rejection_is_reported() {
    let mut form = email_form(FormOptions::default());
    form.input("email", "a@b.com");
    let handler = |_: &FormValues| -> Result<(), SubmitError> { Err(SubmitError::Rejected("server said no".to_owned())) };
    assert_eq!(form.submit(&handler), SubmitOutcome::Rejected(SubmitError::Rejected("server said no".to_owned())));
    assert_eq!(form.error("email"), None);
}

#[test]
fn handler_field_error_is_shown_inline() {
    let mut form = email_form(FormOptions::default());
    form.input("email", "a@b.com");
    let handler = |_: &FormValues| -> Result<(), SubmitError> {
        Err(SubmitError::Field { field: "email".to_owned(), message: "Email already in use".to_owned() })
    };
    assert!(matches!(form.submit(&handler), SubmitOutcome::Rejected(SubmitError::Field { .. })));
    assert_eq!(form.error("email"), Some("Email already in use"));
}

// =============================================================
// Validation timing
// =============================================================

#[test]
fn submit_only_mode_ignores_blur() {
    let mut form = email_form(FormOptions { validate_on_blur: false });
    form.blur("email");
    assert_eq!(form.error("email"), None);
    form.input("email", "x");
    assert_eq!(form.error("email"), None);
}

#[test]
fn blur_mode_validates_on_blur_and_then_live() {
    let mut form = email_form(FormOptions { validate_on_blur: true });
    form.input("email", "x");
    assert_eq!(form.error("email"), None);
    form.blur("email");
    assert_eq!(form.error("email"), Some(BAD_EMAIL));
    form.input("email", "x@y.io");
    assert_eq!(form.error("email"), None);
}

#[test]
fn errors_clear_live_after_failed_submit() {
    let mut form = email_form(FormOptions::default());
    form.submit(&accept_all);
    assert_eq!(form.error("email"), Some(REQUIRED_EMAIL));
    form.input("email", "a@");
    assert_eq!(form.error("email"), Some(BAD_EMAIL));
    form.input("email", "a@b.com");
    assert_eq!(form.error("email"), None);
}

#[test]
fn is_valid_does_not_surface_errors() {
    let form = email_form(FormOptions::default());
    assert!(!form.is_valid());
    assert_eq!(form.error("email"), None);
}

// =============================================================
// Mounting
// =============================================================

#[test]
fn mount_without_defaults_is_create_mode_with_initial_values() {
    let fields = vec![
        FieldDescriptor::new("name", "Name"),
        FieldDescriptor::new("stage", "Stage").options(&[("todo", "To Do")]).initial("todo"),
    ];
    let form = FormState::new(fields, None, FormOptions::default());
    assert_eq!(form.mode(), FormMode::Create);
    assert_eq!(form.value("name"), Some(""));
    assert_eq!(form.value("stage"), Some("todo"));
    assert_eq!(form.field("stage").unwrap().descriptor.kind, InputKind::Select);
}

#[test]
fn mount_with_defaults_is_update_mode() {
    let defaults = FormValues::new().with("email", "a@b.com");
    let form = FormState::new(vec![FieldDescriptor::new("email", "Email")], Some(&defaults), FormOptions::default());
    assert_eq!(form.mode(), FormMode::Update);
    assert_eq!(form.values(), defaults);
}

#[test]
fn unknown_field_names_are_ignored() {
    let mut form = email_form(FormOptions::default());
    form.input("nope", "x");
    form.blur("nope");
    form.set_error("nope", "x");
    assert_eq!(form.value("nope"), None);
    assert_eq!(form.values().len(), 1);
}
