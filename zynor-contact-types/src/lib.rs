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

//! Wire types for the contact webhook.
//!
//! This crate defines the request body posted by the website's contact form
//! to `/api/webhook`. It is shared by the browser client, the native client
//! and any server that wants to receive the submission, and it carries no
//! HTTP or UI dependencies.

pub mod requests;

pub use requests::ContactRequest;
