//! Form-level state: field collection, validation policy, and submit gating.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use super::field::{FieldDescriptor, FieldState, FormValues};
use super::rules::ValidationError;

/// Failure reported by a submission side effect.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The values were rejected because of one field; shown inline there.
    #[error("{message}")]
    Field { field: String, message: String },
    /// The values were rejected as a whole; shown as a notification.
    #[error("{0}")]
    Rejected(String),
}

/// Side effect run with the collected values of a fully valid form.
pub trait SubmitHandler {
    /// # Errors
    ///
    /// Returns a [`SubmitError`] when the create/update action refuses the values.
    fn on_valid_submit(&self, values: &FormValues) -> Result<(), SubmitError>;
}

impl<F> SubmitHandler for F
where
    F: Fn(&FormValues) -> Result<(), SubmitError>,
{
    fn on_valid_submit(&self, values: &FormValues) -> Result<(), SubmitError> {
        self(values)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed validation; the handler was not called.
    Blocked(Vec<(&'static str, ValidationError)>),
    /// The handler accepted these values.
    Submitted(FormValues),
    /// The handler refused the values.
    Rejected(SubmitError),
}

/// Whether the form edits an existing record or creates a new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Update,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormOptions {
    /// Validate a field as soon as it loses focus.
    pub validate_on_blur: bool,
}

#[derive(Clone, Debug)]
pub struct FormState {
    fields: Vec<FieldState>,
    options: FormOptions,
    mode: FormMode,
    attempted: bool,
}

impl FormState {
    /// Mount a form. With `defaults` the form is in update mode and fields
    /// start from those values; otherwise every field starts from its
    /// descriptor's initial value.
    pub fn new(descriptors: Vec<FieldDescriptor>, defaults: Option<&FormValues>, options: FormOptions) -> Self {
        let mode = if defaults.is_some() { FormMode::Update } else { FormMode::Create };
        let fields = descriptors
            .into_iter()
            .map(|d| {
                let value = defaults.and_then(|v| v.get(d.name)).unwrap_or(d.initial).to_owned();
                FieldState::new(d, value)
            })
            .collect();
        Self { fields, options, mode, attempted: false }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.descriptor.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|f| f.descriptor.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.value.as_str())
    }

    /// Current inline error message for `name`.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(|f| f.error.as_ref()).map(ValidationError::message)
    }

    /// Validity of the current values, without touching displayed errors.
    pub fn is_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|f| super::rules::validate(&f.descriptor.rules, &f.value).is_ok())
    }

    /// Record a keystroke. Once a field is showing feedback (after a submit
    /// attempt, or after blur with `validate_on_blur`) it re-validates live.
    pub fn input(&mut self, name: &str, value: impl Into<String>) {
        let live = self.attempted;
        let on_blur = self.options.validate_on_blur;
        if let Some(field) = self.field_mut(name) {
            field.value = value.into();
            if live || (on_blur && field.touched) {
                field.revalidate();
            }
        }
    }

    pub fn blur(&mut self, name: &str) {
        let on_blur = self.options.validate_on_blur;
        if let Some(field) = self.field_mut(name) {
            field.touched = true;
            if on_blur {
                field.revalidate();
            }
        }
    }

    /// Show an externally produced error next to `name`.
    pub fn set_error(&mut self, name: &str, message: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.error = Some(ValidationError::Format(message.into()));
        }
    }

    /// Values of every field, keyed by name.
    pub fn values(&self) -> FormValues {
        self.fields.iter().map(|f| (f.descriptor.name, f.value.clone())).collect()
    }

    fn validate_all(&mut self) -> Vec<(&'static str, ValidationError)> {
        self.fields
            .iter_mut()
            .filter_map(|f| {
                f.revalidate();
                f.error.clone().map(|e| (f.descriptor.name, e))
            })
            .collect()
    }

    /// Validate every field and, when all pass, hand the values to `handler`.
    pub fn submit<H: SubmitHandler + ?Sized>(&mut self, handler: &H) -> SubmitOutcome {
        self.attempted = true;
        let errors = self.validate_all();
        if !errors.is_empty() {
            return SubmitOutcome::Blocked(errors);
        }
        let values = self.values();
        match handler.on_valid_submit(&values) {
            Ok(()) => SubmitOutcome::Submitted(values),
            Err(err) => {
                leptos::logging::warn!("form submit rejected: {err}");
                if let SubmitError::Field { field, message } = &err {
                    self.set_error(field, message.clone());
                }
                SubmitOutcome::Rejected(err)
            }
        }
    }
}
