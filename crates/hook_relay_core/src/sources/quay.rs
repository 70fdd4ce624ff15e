//! Quay webhook source.
//!
//! Quay repository-push notifications name the image as a full pullable URL:
//!
//! ```json
//! {
//!   "docker_url": "quay.io/acme/app",
//!   "updated_tags": ["1.27"]
//! }
//! ```

use async_trait::async_trait;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::warn;

use upstream_client::ChangeNotifier;

use crate::context::HookContext;
use crate::handler::SourceHandler;
use crate::notifier::notify_image_change;
use crate::sources::MAX_BODY_BYTES;

#[derive(Debug, Deserialize)]
struct PushNotification {
    docker_url: String,
}

/// Handler for Quay push notifications.
pub struct Quay;

#[async_trait]
impl SourceHandler for Quay {
    fn source_name(&self) -> &'static str {
        "Quay"
    }

    async fn handle(
        &self,
        api: &dyn ChangeNotifier,
        context: &HookContext,
        request: Request,
    ) -> Response {
        let body = match axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES).await {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "failed to read Quay payload");
                return (StatusCode::BAD_REQUEST, "cannot read webhook payload").into_response();
            }
        };

        let payload: PushNotification = match serde_json::from_slice(&body) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "cannot parse Quay payload");
                return (StatusCode::BAD_REQUEST, "cannot parse webhook payload").into_response();
            }
        };

        notify_image_change(api, &payload.docker_url, context.delivery()).await
    }
}

#[cfg(test)]
#[path = "quay_tests.rs"]
mod tests;
