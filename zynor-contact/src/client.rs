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

//! HTTP client for the contact webhook.

use std::future::Future;
use std::time::Duration;

use futures::future::{select, Either};
use reqwest::Client;
use zynor_contact_types::ContactRequest;

use crate::config::ContactClientConfig;
use crate::error::SubmitError;

/// Posts contact requests to the webhook.
///
/// Works on WASM (browser `fetch`) and native targets via [`reqwest`].
#[derive(Debug, Clone)]
pub struct WebhookClient {
    config: ContactClientConfig,
    http: Client,
}

impl WebhookClient {
    pub fn new(config: ContactClientConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &ContactClientConfig {
        &self.config
    }

    /// Send one submission.
    ///
    /// Calls `POST {base_url}{endpoint_path}` with a JSON body. Any 2xx
    /// status is success. The request is never retried. The configured
    /// timeout bounds the whole exchange, including reading an error body.
    pub async fn send(&self, request: &ContactRequest) -> Result<(), SubmitError> {
        let url = self.config.endpoint_url();
        log::info!("Submitting contact request to {url}");

        let outcome = self.bounded(self.exchange(&url, request)).await;
        if matches!(outcome, Err(SubmitError::Timeout)) {
            log::warn!("Webhook timed out after {:?}", self.config.timeout);
        }
        outcome
    }

    async fn exchange(&self, url: &str, request: &ContactRequest) -> Result<(), SubmitError> {
        let builder = self.http.post(url).json(request);
        // reqwest applies this to both the response head and the body
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(self.config.timeout);

        let response = builder.send().await.map_err(classify)?;
        let status = response.status();
        if status.is_success() {
            log::debug!("Webhook accepted submission with {status}");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        log::warn!("Webhook rejected submission with {status}: {body}");
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn bounded<F>(&self, exchange: F) -> Result<(), SubmitError>
    where
        F: Future<Output = Result<(), SubmitError>>,
    {
        exchange.await
    }

    #[cfg(target_arch = "wasm32")]
    async fn bounded<F>(&self, exchange: F) -> Result<(), SubmitError>
    where
        F: Future<Output = Result<(), SubmitError>>,
    {
        let timer = gloo_timers::future::TimeoutFuture::new(timeout_millis(self.config.timeout));
        race_deadline(exchange, timer).await
    }
}

fn classify(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        SubmitError::Timeout
    } else {
        log::warn!("Webhook request failed: {err}");
        SubmitError::Network(err)
    }
}

/// Resolve `exchange`, or fail with [`SubmitError::Timeout`] once
/// `deadline` fires first.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
async fn race_deadline<T, F, D>(exchange: F, deadline: D) -> Result<T, SubmitError>
where
    F: Future<Output = Result<T, SubmitError>>,
    D: Future<Output = ()>,
{
    futures::pin_mut!(exchange);
    futures::pin_mut!(deadline);

    match select(exchange, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(SubmitError::Timeout),
    }
}

/// Browser timers take a `u32` millisecond delay.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn timeout_millis(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_millis_saturates() {
        assert_eq!(timeout_millis(Duration::from_secs(8)), 8_000);
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_covers_a_stalled_body_read() {
        // head arrives, then the body never does
        let exchange = async {
            futures::future::ready(()).await;
            futures::future::pending::<Result<(), SubmitError>>().await
        };
        let deadline = tokio::time::sleep(Duration::from_millis(300));

        let outcome = race_deadline(exchange, deadline).await;
        assert!(matches!(outcome, Err(SubmitError::Timeout)));
    }

    #[tokio::test(start_paused = true)]
    async fn finished_exchange_beats_the_deadline() {
        let rejected = async {
            Err::<(), _>(SubmitError::Rejected {
                status: 500,
                body: "boom".to_string(),
            })
        };
        let outcome = race_deadline(rejected, tokio::time::sleep(Duration::from_secs(8))).await;
        assert!(matches!(outcome, Err(SubmitError::Rejected { status: 500, .. })));

        let accepted = async { Ok(()) };
        let outcome = race_deadline(accepted, futures::future::pending()).await;
        assert!(outcome.is_ok());
    }

    #[test]
    fn client_keeps_its_config() {
        let client = WebhookClient::new(ContactClientConfig::new("https://zynor.ai"));
        assert_eq!(client.config().endpoint_url(), "https://zynor.ai/api/webhook");
    }
}
