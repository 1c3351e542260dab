/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Validation gate run before any submission.

use thiserror::Error;

use crate::form::{Field, FormState};

/// Why a form may not be submitted yet.
///
/// The `Display` text is shown to the visitor as-is.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,

    #[error("Please enter your email.")]
    MissingEmail,

    #[error("Please enter a message.")]
    MissingMessage,

    #[error("Please enter a valid 10-digit phone number.")]
    InvalidPhone,
}

impl ValidationError {
    /// The input the error should be rendered next to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingName => Field::Name,
            ValidationError::MissingEmail => Field::Email,
            ValidationError::MissingMessage => Field::Message,
            ValidationError::InvalidPhone => Field::Phone,
        }
    }
}

/// Decide whether `form` may be submitted.
///
/// Required fields are checked first, in form order, then the phone. The
/// first failing check wins.
pub fn validate(form: &FormState) -> Result<(), ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if form.email.trim().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if form.message.trim().is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    if form.phone_invalid() {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> FormState {
        let mut form = FormState::new();
        form.set(Field::Name, name);
        form.set(Field::Email, email);
        form.set(Field::Message, message);
        form
    }

    #[test]
    fn missing_name_is_reported() {
        let err = validate(&form("", "a@b.com", "hi")).unwrap_err();
        assert_eq!(err, ValidationError::MissingName);
        assert_eq!(err.field(), Field::Name);
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        assert_eq!(
            validate(&form("John", "   ", "hi")),
            Err(ValidationError::MissingEmail)
        );
        assert_eq!(
            validate(&form("John", "a@b.com", "\n\t ")),
            Err(ValidationError::MissingMessage)
        );
    }

    #[test]
    fn email_format_is_not_checked() {
        assert_eq!(validate(&form("John", "not an email", "hi")), Ok(()));
    }

    #[test]
    fn touched_short_phone_is_rejected() {
        let mut form = form("John", "a@b.com", "hello");
        form.set(Field::Phone, "123-456-789");
        let err = validate(&form).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone);
        assert_eq!(err.field(), Field::Phone);
    }

    #[test]
    fn empty_phone_is_optional() {
        let mut form = form("John", "a@b.com", "hello");
        assert_eq!(validate(&form), Ok(()));

        form.set(Field::Phone, "");
        assert_eq!(validate(&form), Ok(()));
    }

    #[test]
    fn untouched_phone_is_not_checked() {
        let mut form = form("John", "a@b.com", "hello");
        form.phone = "12".to_string();
        assert!(!form.phone_touched());
        assert_eq!(validate(&form), Ok(()));
    }

    #[test]
    fn complete_phone_passes() {
        let mut form = form("John", "a@b.com", "hello");
        form.set(Field::Phone, "1234567890");
        assert_eq!(validate(&form), Ok(()));
    }

    #[test]
    fn required_fields_are_checked_before_phone() {
        let mut form = form("", "a@b.com", "hello");
        form.set(Field::Phone, "1");
        assert_eq!(validate(&form), Err(ValidationError::MissingName));
    }
}
