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

//! Error types for the contact core.

use thiserror::Error;

/// Banner text shown when the webhook answers with a non-success status.
pub const REJECTED_MESSAGE: &str = "Failed to submit. Please try again.";

/// Banner text shown when the webhook does not answer in time.
pub const TIMEOUT_MESSAGE: &str = "The request timed out. Please try again.";

/// Banner text for every failure that has no more specific message.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Try again.";

/// Errors returned by [`WebhookClient::send`](crate::WebhookClient::send).
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The webhook answered with a status outside the 2xx range.
    #[error("Webhook rejected the submission ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// No response arrived within the configured timeout.
    #[error("Webhook did not respond in time")]
    Timeout,

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl SubmitError {
    /// Text surfaced to the visitor in the error banner.
    ///
    /// Transport details stay in the logs; the visitor only sees whether
    /// the server refused the message or whether the request got lost.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Rejected { .. } => REJECTED_MESSAGE,
            SubmitError::Timeout => TIMEOUT_MESSAGE,
            SubmitError::Network(_) => FALLBACK_MESSAGE,
        }
    }
}

/// Errors raised while loading [`ContactClientConfig`](crate::ContactClientConfig).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL does not start with `http://` or `https://`.
    #[error("CONTACT_BASE_URL must be an http(s) URL, got {0:?}")]
    InvalidBaseUrl(String),

    /// The endpoint path does not start with `/`.
    #[error("CONTACT_ENDPOINT_PATH must start with '/', got {0:?}")]
    InvalidEndpointPath(String),

    /// The timeout is not a positive integer number of seconds.
    #[error("CONTACT_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_maps_to_retry_banner() {
        let err = SubmitError::Rejected {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.user_message(), REJECTED_MESSAGE);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn timeout_has_its_own_banner() {
        assert_eq!(SubmitError::Timeout.user_message(), TIMEOUT_MESSAGE);
    }
}
