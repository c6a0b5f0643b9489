//! Field descriptors and per-field runtime state.

use serde::Serialize;
use std::collections::BTreeMap;

use super::rules::{Rule, ValidationError, validate};

/// HTML input flavour rendered for a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Date,
    Number,
    Select,
}

impl InputKind {
    /// Value of the `type` attribute. `Select` renders a `<select>` instead.
    pub fn html_type(self) -> &'static str {
        match self {
            Self::Text | Self::Select => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
            Self::Number => "number",
        }
    }
}

/// Static description of one form input.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub placeholder: &'static str,
    pub rules: Vec<Rule>,
    /// `(value, label)` pairs for `Select` fields.
    pub options: Vec<(&'static str, &'static str)>,
    /// Value used when the form mounts without default values.
    pub initial: &'static str,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: InputKind::Text,
            placeholder: "",
            rules: Vec::new(),
            options: Vec::new(),
            initial: "",
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn options(mut self, options: &[(&'static str, &'static str)]) -> Self {
        self.kind = InputKind::Select;
        self.options = options.to_vec();
        self
    }

    #[must_use]
    pub fn initial(mut self, initial: &'static str) -> Self {
        self.initial = initial;
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(Rule::is_required)
    }
}

/// Live value and error of one field.
#[derive(Clone, Debug)]
pub struct FieldState {
    pub descriptor: FieldDescriptor,
    pub value: String,
    pub error: Option<ValidationError>,
    pub touched: bool,
}

impl FieldState {
    pub fn new(descriptor: FieldDescriptor, value: String) -> Self {
        Self { descriptor, value, error: None, touched: false }
    }

    /// Re-run the field's rules and store the outcome. Returns validity.
    pub fn revalidate(&mut self) -> bool {
        self.error = validate(&self.descriptor.rules, &self.value).err();
        self.error.is_none()
    }
}

/// Collected field values keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Value for `name`, or an empty string when absent.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
