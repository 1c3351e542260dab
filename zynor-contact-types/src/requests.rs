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

//! Request types for the contact webhook.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/webhook`.
///
/// ```json
/// { "name": "John Carter", "email": "hi@zynor.ai", "phone": "813-921-1717", "message": "Hello" }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    /// Full name of the sender.
    pub name: String,

    /// Reply address. Only checked for presence, never for format.
    pub email: String,

    /// Formatted phone number (`DDD-DDD-DDDD`), or empty when not given.
    #[serde(default)]
    pub phone: String,

    /// Free-text message body.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_the_four_form_fields() {
        let request = ContactRequest {
            name: "John".to_string(),
            email: "a@b.com".to_string(),
            phone: "123-456-7890".to_string(),
            message: "hello".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "John",
                "email": "a@b.com",
                "phone": "123-456-7890",
                "message": "hello",
            })
        );
    }

    #[test]
    fn phone_is_optional_when_deserializing() {
        let request: ContactRequest =
            serde_json::from_str(r#"{"name":"n","email":"e","message":"m"}"#).unwrap();
        assert_eq!(request.phone, "");
    }
}
