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

//! Contact form core for the zynor.ai website.
//!
//! Formats phone input as it is typed, validates the form, and submits it
//! once to the contact webhook, tracking the outcome as a
//! [`SubmissionStatus`]. Works on WASM (browser) and native targets.
//!
//! # Example
//!
//! ```no_run
//! use zynor_contact::{ContactClientConfig, ContactForm, Field, WebhookClient};
//!
//! # async fn example() {
//! let client = WebhookClient::new(ContactClientConfig::new("https://zynor.ai"));
//! let mut contact = ContactForm::new();
//! contact.update(Field::Name, "John Carter");
//! contact.update(Field::Email, "hi@zynor.ai");
//! contact.update(Field::Phone, "8139211717");
//! contact.update(Field::Message, "How can we help?");
//!
//! let status = contact.submit(&client).await;
//! println!("{status:?}");
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod phone;
pub mod pipeline;
pub mod validation;

pub use client::WebhookClient;
pub use config::ContactClientConfig;
pub use error::{ConfigError, SubmitError};
pub use form::{Field, FormState};
pub use phone::{format_phone, is_complete_phone, phone_digits};
pub use pipeline::{ContactForm, SubmissionStatus, SUCCESS_MESSAGE};
pub use validation::{validate, ValidationError};
pub use zynor_contact_types;
pub use zynor_contact_types::ContactRequest;
