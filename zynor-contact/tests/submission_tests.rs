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

//! End-to-end submission tests against an in-process webhook.
//!
//! Each test binds an axum server on an ephemeral port that counts requests
//! and answers with a configurable status after a configurable delay.

use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use zynor_contact::error::{FALLBACK_MESSAGE, REJECTED_MESSAGE, TIMEOUT_MESSAGE};
use zynor_contact::{
    ContactClientConfig, ContactForm, Field, SubmissionStatus, WebhookClient, SUCCESS_MESSAGE,
};

#[derive(Clone)]
struct Webhook {
    status: StatusCode,
    delay: Duration,
    hits: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<serde_json::Value>>>,
    content_types: Arc<Mutex<Vec<String>>>,
}

impl Webhook {
    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn receive(
    State(hook): State<Webhook>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    hook.hits.fetch_add(1, Ordering::SeqCst);
    hook.bodies.lock().unwrap().push(body);
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        hook.content_types
            .lock()
            .unwrap()
            .push(content_type.to_str().unwrap_or_default().to_string());
    }
    tokio::time::sleep(hook.delay).await;
    hook.status
}

async fn spawn_webhook(status: StatusCode, delay: Duration) -> (WebhookClient, Webhook) {
    let hook = Webhook {
        status,
        delay,
        hits: Arc::new(AtomicUsize::new(0)),
        bodies: Arc::new(Mutex::new(Vec::new())),
        content_types: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/api/webhook", post(receive))
        .with_state(hook.clone());

    (serve(app).await, hook)
}

async fn serve(app: Router) -> WebhookClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    WebhookClient::new(ContactClientConfig::new(&format!("http://{addr}")))
}

fn filled() -> ContactForm {
    let mut contact = ContactForm::new();
    contact.update(Field::Name, "John Carter");
    contact.update(Field::Email, "hi@zynor.ai");
    contact.update(Field::Phone, "(813) 921-1717");
    contact.update(Field::Message, "How can we help?");
    contact
}

#[tokio::test]
async fn accepted_submission_clears_form_and_confirms() {
    let (client, hook) = spawn_webhook(StatusCode::OK, Duration::ZERO).await;
    let mut contact = filled();

    let status = contact.submit(&client).await.clone();

    assert_eq!(status, SubmissionStatus::Success(SUCCESS_MESSAGE.to_string()));
    assert!(contact.form().is_empty());
    assert!(!contact.form().phone_touched());
    assert_eq!(hook.hits(), 1);

    let bodies = hook.bodies.lock().unwrap();
    assert_eq!(
        bodies[0],
        serde_json::json!({
            "name": "John Carter",
            "email": "hi@zynor.ai",
            "phone": "813-921-1717",
            "message": "How can we help?",
        })
    );
    let content_types = hook.content_types.lock().unwrap();
    assert_eq!(content_types[0], "application/json");
}

#[tokio::test]
async fn any_2xx_counts_as_success() {
    let (client, _hook) = spawn_webhook(StatusCode::NO_CONTENT, Duration::ZERO).await;
    let mut contact = filled();
    assert_eq!(
        contact.submit(&client).await.success_message(),
        Some(SUCCESS_MESSAGE)
    );
}

#[tokio::test]
async fn rejected_submission_keeps_values() {
    let (client, hook) = spawn_webhook(StatusCode::INTERNAL_SERVER_ERROR, Duration::ZERO).await;
    let mut contact = filled();
    let before = contact.form().clone();

    let status = contact.submit(&client).await.clone();

    assert_eq!(status, SubmissionStatus::Failure(REJECTED_MESSAGE.to_string()));
    assert_eq!(contact.form(), &before);
    assert_eq!(hook.hits(), 1);
}

#[tokio::test]
async fn invalid_form_never_reaches_the_webhook() {
    let (client, hook) = spawn_webhook(StatusCode::OK, Duration::ZERO).await;
    let mut contact = filled();
    contact.update(Field::Phone, "123-456-789");

    let status = contact.submit(&client).await.clone();

    assert_eq!(
        status,
        SubmissionStatus::Failure("Please enter a valid 10-digit phone number.".to_string())
    );
    assert_eq!(hook.hits(), 0);
}

#[tokio::test]
async fn second_submit_while_in_flight_sends_nothing() {
    let (client, hook) = spawn_webhook(StatusCode::OK, Duration::from_millis(200)).await;
    let mut contact = filled();

    let request = contact.begin_submit().expect("valid form");
    let in_flight = tokio::spawn({
        let client = client.clone();
        async move { client.send(&request).await }
    });

    // The submit control is disabled; a repeated click is a no-op.
    assert!(contact.is_submitting());
    assert_eq!(contact.begin_submit(), None);

    let outcome = in_flight.await.unwrap();
    contact.complete_submit(outcome);

    assert_eq!(contact.status().success_message(), Some(SUCCESS_MESSAGE));
    assert_eq!(hook.hits(), 1);
}

#[tokio::test]
async fn slow_webhook_times_out_as_failure() {
    let (client, hook) = spawn_webhook(StatusCode::OK, Duration::from_secs(5)).await;
    let client = WebhookClient::new(
        client
            .config()
            .clone()
            .with_timeout(Duration::from_millis(200)),
    );
    let mut contact = filled();
    let before = contact.form().clone();

    let status = contact.submit(&client).await.clone();

    assert_eq!(status, SubmissionStatus::Failure(TIMEOUT_MESSAGE.to_string()));
    assert_eq!(contact.form(), &before);
    assert_eq!(hook.hits(), 1);
}

#[tokio::test]
async fn unreachable_webhook_shows_fallback_message() {
    let client = WebhookClient::new(ContactClientConfig::new("http://127.0.0.1:1"));
    let mut contact = filled();

    let status = contact.submit(&client).await.clone();

    assert_eq!(status, SubmissionStatus::Failure(FALLBACK_MESSAGE.to_string()));
    assert!(!contact.form().is_empty());
}

#[tokio::test]
async fn form_can_be_resubmitted_after_failure() {
    let (failing, _) = spawn_webhook(StatusCode::BAD_GATEWAY, Duration::ZERO).await;
    let (working, hook) = spawn_webhook(StatusCode::OK, Duration::ZERO).await;
    let mut contact = filled();

    assert!(contact.submit(&failing).await.error_message().is_some());
    assert!(contact.submit(&working).await.success_message().is_some());
    assert_eq!(hook.hits(), 1);
}

#[tokio::test]
async fn stalled_error_body_still_ends_in_failure() {
    let app = Router::new().route(
        "/api/webhook",
        post(|| async {
            let stalled = futures::stream::pending::<Result<Bytes, Infallible>>();
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from_stream(stalled))
        }),
    );
    let client = serve(app).await;
    let client = WebhookClient::new(
        client
            .config()
            .clone()
            .with_timeout(Duration::from_millis(300)),
    );
    let mut contact = filled();

    let status = tokio::time::timeout(Duration::from_secs(3), contact.submit(&client))
        .await
        .expect("submission must resolve within the client timeout")
        .clone();

    assert!(status.error_message().is_some());
    assert!(!contact.is_submitting());
}
