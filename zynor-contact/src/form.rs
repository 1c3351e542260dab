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

//! In-memory state of the contact form.

use std::fmt;

use zynor_contact_types::ContactRequest;

use crate::phone::{format_phone, is_complete_phone};

/// One of the four inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// The `name` attribute of the matching input element.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values typed so far, plus whether the phone input was edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    /// Always stored in its formatted display form.
    pub phone: String,
    pub message: String,
    phone_touched: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new value for `field`.
    ///
    /// Phone input is reformatted and marks the phone as touched; the other
    /// fields are stored verbatim.
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Phone => {
                self.phone = format_phone(value);
                self.phone_touched = true;
            }
            Field::Message => self.message = value.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn phone_touched(&self) -> bool {
        self.phone_touched
    }

    /// Whether the phone input should be flagged inline.
    ///
    /// An untouched or empty phone is never invalid: the field is optional.
    pub fn phone_invalid(&self) -> bool {
        self.phone_touched && !self.phone.is_empty() && !is_complete_phone(&self.phone)
    }

    /// Empty every field and forget the touched flag.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Snapshot of the values in their wire shape.
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_edits_are_formatted_and_touch_the_field() {
        let mut form = FormState::new();
        assert!(!form.phone_touched());

        form.set(Field::Phone, "8139211717");
        assert_eq!(form.phone, "813-921-1717");
        assert!(form.phone_touched());
    }

    #[test]
    fn other_fields_are_stored_verbatim() {
        let mut form = FormState::new();
        form.set(Field::Name, "  John Carter ");
        form.set(Field::Email, "hi@zynor.ai");
        form.set(Field::Message, "How can we help?");
        assert_eq!(form.get(Field::Name), "  John Carter ");
        assert_eq!(form.get(Field::Email), "hi@zynor.ai");
        assert_eq!(form.get(Field::Message), "How can we help?");
        assert!(!form.phone_touched());
    }

    #[test]
    fn inline_phone_flag_needs_touch_and_content() {
        let mut form = FormState::new();
        assert!(!form.phone_invalid());

        form.set(Field::Phone, "123");
        assert!(form.phone_invalid());

        form.set(Field::Phone, "");
        assert!(!form.phone_invalid());

        form.set(Field::Phone, "123-456-7890");
        assert!(!form.phone_invalid());
    }

    #[test]
    fn clear_resets_values_and_touch() {
        let mut form = FormState::new();
        form.set(Field::Name, "John");
        form.set(Field::Phone, "12");
        form.clear();
        assert!(form.is_empty());
        assert!(!form.phone_touched());
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn request_carries_formatted_phone() {
        let mut form = FormState::new();
        form.set(Field::Name, "John");
        form.set(Field::Email, "a@b.com");
        form.set(Field::Phone, "(123) 456 7890");
        form.set(Field::Message, "hello");

        let request = form.to_request();
        assert_eq!(request.name, "John");
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.phone, "123-456-7890");
        assert_eq!(request.message, "hello");
    }
}
