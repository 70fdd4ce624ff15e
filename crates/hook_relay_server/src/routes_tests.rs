//! Tests for gateway routing.

use super::*;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::StatusCode;
use tower::ServiceExt;

use hook_relay_core::sources::dockerhub::DockerHub;
use hook_relay_core::{DeliveryPolicy, HookContext, HookDispatcher};
use upstream_client::{ChangeEvent, ChangeNotifier, ChangeSource, UpstreamResult};

/// Call-recording stub for the control plane.
#[derive(Clone, Default)]
struct RecordingNotifier {
    calls: Arc<Mutex<Vec<ChangeEvent>>>,
}

impl RecordingNotifier {
    fn calls(&self) -> Vec<ChangeEvent> {
        self.calls.lock().expect("Lock poisoned").clone()
    }
}

#[async_trait]
impl ChangeNotifier for RecordingNotifier {
    async fn notify_change(&self, change: ChangeEvent) -> UpstreamResult<()> {
        self.calls.lock().expect("Lock poisoned").push(change);
        Ok(())
    }
}

const DIGEST: &str = "0f10e2b85a3e28ad4bd2b9ad2c8d4d5a9b3ab2f50f4d2e9b1c6d7e8f90123456";

fn test_router(notifier: RecordingNotifier) -> Router {
    let context = HookContext::new(
        b"secret".to_vec(),
        "index.docker.io",
        DeliveryPolicy::BestEffort,
    );
    let dispatcher = HookDispatcher::new(Arc::new(DockerHub), context, Arc::new(notifier));
    create_router(vec![CompiledEndpoint::new(DIGEST.to_string(), dispatcher)])
}

fn hook_request(digest: &str, body: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("POST")
        .uri(format!("/hook/{digest}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

const PUSH_BODY: &str = r#"{ "repository": { "repo_name": "acme/app" } }"#;

/// Verify a delivery to the registered digest reaches the source handler
/// and the control plane.
#[tokio::test]
async fn test_registered_digest_dispatches() {
    let notifier = RecordingNotifier::default();
    let router = test_router(notifier.clone());

    let response = router.oneshot(hook_request(DIGEST, PUSH_BODY)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let calls = notifier.calls();
    assert_eq!(calls.len(), 1);
    let ChangeSource::Image(update) = &calls[0].source;
    assert_eq!(update.name, "acme/app");
}

/// Verify a request to an unregistered digest reaches no handler.
#[tokio::test]
async fn test_unregistered_digest_falls_through() {
    let notifier = RecordingNotifier::default();
    let router = test_router(notifier.clone());

    let other = "deadbeef".repeat(8);
    let response = router.oneshot(hook_request(&other, PUSH_BODY)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(notifier.calls().is_empty());
}

/// Verify digest matching is exact and case-sensitive.
#[tokio::test]
async fn test_digest_matching_is_case_sensitive() {
    let notifier = RecordingNotifier::default();
    let router = test_router(notifier.clone());

    let uppercased = DIGEST.to_uppercase();
    let response = router
        .oneshot(hook_request(&uppercased, PUSH_BODY))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(notifier.calls().is_empty());
}

/// Verify the health endpoint answers without a capability URL.
#[tokio::test]
async fn test_health_endpoint() {
    let router = test_router(RecordingNotifier::default());

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("Failed to build request");
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

/// Verify a router with no endpoints still serves health and 404s hooks.
#[tokio::test]
async fn test_empty_router() {
    let router = create_router(Vec::new());

    let response = router.oneshot(hook_request(DIGEST, PUSH_BODY)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
