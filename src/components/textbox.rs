//! Labeled input bound to one field of a [`FormState`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms keep their [`FormState`] in a signal. Each rendered field gets a
//! [`FormHandle`] naming the field it owns, so input, blur, and error display
//! all flow through the shared form rather than per-input signals.

#[cfg(test)]
#[path = "textbox_test.rs"]
mod textbox_test;

use leptos::prelude::*;

use crate::form::{FieldDescriptor, FormState, InputKind};

/// Registration of one named field with its parent form.
#[derive(Clone, Copy)]
pub struct FormHandle {
    form: RwSignal<FormState>,
    name: &'static str,
}

impl FormHandle {
    pub fn register(form: RwSignal<FormState>, name: &'static str) -> Self {
        Self { form, name }
    }

    /// One handle per field, in declaration order.
    pub fn all(form: RwSignal<FormState>) -> Vec<Self> {
        form.with_untracked(|f| f.fields().iter().map(|field| Self::register(form, field.descriptor.name)).collect())
    }

    pub fn name(self) -> &'static str {
        self.name
    }

    pub fn descriptor(self) -> Option<FieldDescriptor> {
        self.form.with_untracked(|f| f.field(self.name).map(|field| field.descriptor.clone()))
    }

    pub fn value(self) -> String {
        self.form.with(|f| f.value(self.name).unwrap_or_default().to_owned())
    }

    pub fn error(self) -> Option<String> {
        self.form.with(|f| f.error(self.name).map(str::to_owned))
    }

    pub fn set(self, value: String) {
        self.form.update(|f| f.input(self.name, value));
    }

    pub fn blur(self) {
        self.form.update(|f| f.blur(self.name));
    }
}

fn label_text(descriptor: &FieldDescriptor) -> String {
    if descriptor.is_required() { format!("{} *", descriptor.label) } else { descriptor.label.to_owned() }
}

fn input_class(has_error: bool) -> &'static str {
    if has_error { "field__input field__input--invalid" } else { "field__input" }
}

#[component]
pub fn Textbox(field: FormHandle) -> impl IntoView {
    let Some(descriptor) = field.descriptor() else {
        leptos::logging::warn!("textbox bound to unknown field {}", field.name());
        return ().into_any();
    };
    let input_id = format!("field-{}", descriptor.name);
    let label = label_text(&descriptor);
    let class = move || input_class(field.error().is_some());

    let control = if descriptor.kind == InputKind::Select {
        view! {
            <select
                id=input_id.clone()
                name=descriptor.name
                class=class
                prop:value=move || field.value()
                on:change=move |ev| field.set(event_target_value(&ev))
                on:blur=move |_| field.blur()
            >
                {descriptor
                    .options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        }
        .into_any()
    } else {
        view! {
            <input
                id=input_id.clone()
                name=descriptor.name
                type=descriptor.kind.html_type()
                class=class
                placeholder=descriptor.placeholder
                prop:value=move || field.value()
                on:input=move |ev| field.set(event_target_value(&ev))
                on:blur=move |_| field.blur()
            />
        }
        .into_any()
    };

    view! {
        <div class="field">
            <label class="field__label" for=input_id>
                {label}
            </label>
            {control}
            <Show when=move || field.error().is_some()>
                <span class="field__error">{move || field.error().unwrap_or_default()}</span>
            </Show>
        </div>
    }
    .into_any()
}
