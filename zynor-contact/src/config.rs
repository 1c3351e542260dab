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

//! Client configuration, with defaults and environment overrides.

use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Path of the contact webhook, relative to the site origin.
pub const DEFAULT_ENDPOINT_PATH: &str = "/api/webhook";

/// Origin used when nothing else is configured (the local dev server).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Upper bound on a single submission before it is reported as failed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Where and how the contact form submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactClientConfig {
    /// Site origin, e.g. `"https://zynor.ai"`. Trailing slashes are ignored.
    pub base_url: String,
    /// Webhook path, e.g. `"/api/webhook"`.
    pub endpoint_path: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ContactClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ContactClientConfig {
    /// Default configuration pointed at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn with_endpoint_path(mut self, path: &str) -> Self {
        self.endpoint_path = path.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// # Optional
    /// - `CONTACT_BASE_URL` (default: `"http://127.0.0.1:3000"`)
    /// - `CONTACT_ENDPOINT_PATH` (default: `"/api/webhook"`)
    /// - `CONTACT_TIMEOUT_SECS` (default: `"8"`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = non_empty("CONTACT_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        let endpoint_path =
            non_empty("CONTACT_ENDPOINT_PATH").unwrap_or_else(|| DEFAULT_ENDPOINT_PATH.to_string());
        if !endpoint_path.starts_with('/') {
            return Err(ConfigError::InvalidEndpointPath(endpoint_path));
        }

        let timeout = match non_empty("CONTACT_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self::new(&base_url)
            .with_endpoint_path(&endpoint_path)
            .with_timeout(timeout))
    }

    /// Absolute URL of the webhook.
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint_path)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_local_webhook() {
        let config = ContactClientConfig::default();
        assert_eq!(config.endpoint_url(), "http://127.0.0.1:3000/api/webhook");
        assert_eq!(config.timeout, Duration::from_secs(8));
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = ContactClientConfig::new("https://zynor.ai/");
        assert_eq!(config.endpoint_url(), "https://zynor.ai/api/webhook");
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = ContactClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ContactClientConfig::default());
    }

    #[test]
    fn environment_overrides_every_setting() {
        let config = ContactClientConfig::from_lookup(lookup(&[
            ("CONTACT_BASE_URL", "https://zynor.ai"),
            ("CONTACT_ENDPOINT_PATH", "/hooks/contact"),
            ("CONTACT_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint_url(), "https://zynor.ai/hooks/contact");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert_eq!(
            ContactClientConfig::from_lookup(lookup(&[("CONTACT_BASE_URL", "zynor.ai")])),
            Err(ConfigError::InvalidBaseUrl("zynor.ai".to_string()))
        );
        assert_eq!(
            ContactClientConfig::from_lookup(lookup(&[("CONTACT_ENDPOINT_PATH", "api")])),
            Err(ConfigError::InvalidEndpointPath("api".to_string()))
        );
        assert_eq!(
            ContactClientConfig::from_lookup(lookup(&[("CONTACT_TIMEOUT_SECS", "0")])),
            Err(ConfigError::InvalidTimeout("0".to_string()))
        );
        assert_eq!(
            ContactClientConfig::from_lookup(lookup(&[("CONTACT_TIMEOUT_SECS", "soon")])),
            Err(ConfigError::InvalidTimeout("soon".to_string()))
        );
    }
}
