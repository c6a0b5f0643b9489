//! Ordered validation rules for single form fields.
//!
//! Rules run in declaration order and the first failure wins. Apart from
//! `Required`, rules pass on a blank value so optional fields can carry
//! format checks.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::fmt;

/// Field-level validation failure, rendered inline next to the field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0}")]
    Required(String),
    #[error("{0}")]
    Format(String),
    #[error("{0}")]
    Length(String),
    #[error("{0}")]
    Range(String),
}

impl ValidationError {
    pub fn message(&self) -> &str {
        match self {
            Self::Required(m) | Self::Format(m) | Self::Length(m) | Self::Range(m) => m,
        }
    }
}

#[derive(Clone)]
pub enum Rule {
    Required { message: String },
    Email { message: String },
    MinLength { min: usize, message: String },
    MaxLength { max: usize, message: String },
    Pattern { test: fn(&str) -> bool, message: String },
    /// `YYYY-MM-DD` calendar date.
    IsoDate { message: String },
    /// Whole number in `0..=100`.
    PercentRange { message: String },
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { .. } => f.write_str("Required"),
            Self::Email { .. } => f.write_str("Email"),
            Self::MinLength { min, .. } => write!(f, "MinLength({min})"),
            Self::MaxLength { max, .. } => write!(f, "MaxLength({max})"),
            Self::Pattern { .. } => f.write_str("Pattern"),
            Self::IsoDate { .. } => f.write_str("IsoDate"),
            Self::PercentRange { .. } => f.write_str("PercentRange"),
        }
    }
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required { message: message.into() }
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::Email { message: message.into() }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::MinLength { min, message: message.into() }
    }

    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::MaxLength { max, message: message.into() }
    }

    pub fn pattern(test: fn(&str) -> bool, message: impl Into<String>) -> Self {
        Self::Pattern { test, message: message.into() }
    }

    pub fn iso_date(message: impl Into<String>) -> Self {
        Self::IsoDate { message: message.into() }
    }

    pub fn percent_range(message: impl Into<String>) -> Self {
        Self::PercentRange { message: message.into() }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required { .. })
    }

    /// Check `value` against this rule alone.
    ///
    /// # Errors
    ///
    /// Returns the rule's [`ValidationError`] when `value` fails it.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return match self {
                Self::Required { message } => Err(ValidationError::Required(message.clone())),
                _ => Ok(()),
            };
        }
        match self {
            Self::Required { .. } => Ok(()),
            Self::Email { message } => fail_unless(is_email(trimmed), || ValidationError::Format(message.clone())),
            Self::MinLength { min, message } => {
                fail_unless(trimmed.chars().count() >= *min, || ValidationError::Length(message.clone()))
            }
            Self::MaxLength { max, message } => {
                fail_unless(trimmed.chars().count() <= *max, || ValidationError::Length(message.clone()))
            }
            Self::Pattern { test, message } => fail_unless(test(trimmed), || ValidationError::Format(message.clone())),
            Self::IsoDate { message } => fail_unless(is_iso_date(trimmed), || ValidationError::Format(message.clone())),
            Self::PercentRange { message } => {
                fail_unless(parse_percent(trimmed).is_some(), || ValidationError::Range(message.clone()))
            }
        }
    }
}

fn fail_unless(ok: bool, err: impl FnOnce() -> ValidationError) -> Result<(), ValidationError> {
    if ok { Ok(()) } else { Err(err()) }
}

/// Run `rules` in order; the first failure wins.
///
/// # Errors
///
/// Returns the first failing rule's [`ValidationError`].
pub fn validate(rules: &[Rule], value: &str) -> Result<(), ValidationError> {
    rules.iter().try_for_each(|rule| rule.check(value))
}

/// Loose address shape check: one `@`, non-empty local part, dotted domain.
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// `YYYY-MM-DD` with a real calendar day.
pub fn is_iso_date(value: &str) -> bool {
    if !value.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        return false;
    }
    let mut parts = value.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return false;
    }
    let (Ok(year), Ok(month), Ok(day)) = (y.parse::<u32>(), m.parse::<u32>(), d.parse::<u32>()) else {
        return false;
    };
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap => 29,
        2 => 28,
        _ => return false,
    };
    (1..=days_in_month).contains(&day)
}

/// Parse a whole-number percentage in `0..=100`.
pub fn parse_percent(value: &str) -> Option<u8> {
    value.trim().parse::<u8>().ok().filter(|p| *p <= 100)
}
