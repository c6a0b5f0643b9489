//! Form entry abstraction: descriptors, ordered rules, and submit gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::textbox` renders a field bound to a [`FormState`] held in a
//! signal; pages build descriptor lists and supply a [`SubmitHandler`] that
//! performs the create/update. Validation failures are displayed state and
//! never leave this module as errors.

pub mod field;
pub mod rules;
pub mod state;

pub use field::{FieldDescriptor, FieldState, FormValues, InputKind};
pub use rules::{Rule, ValidationError};
pub use state::{FormMode, FormOptions, FormState, SubmitError, SubmitHandler, SubmitOutcome};
