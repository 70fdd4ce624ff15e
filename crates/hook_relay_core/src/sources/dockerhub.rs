//! Docker Hub webhook source.
//!
//! Docker Hub push notifications carry the repository under
//! `repository.repo_name`:
//!
//! ```json
//! {
//!   "push_data": { "tag": "1.27" },
//!   "repository": { "repo_name": "acme/app" }
//! }
//! ```
//!
//! Docker Hub signs nothing; the capability URL is the only authentication.

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
struct PushPayload {
    repository: Repository,
}

#[derive(Debug, Deserialize)]
struct Repository {
    repo_name: String,
}

/// Handler for Docker Hub push webhooks.
pub struct DockerHub;

#[async_trait]
impl SourceHandler for DockerHub {
    fn source_name(&self) -> &'static str {
        "DockerHub"
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
                warn!(error = %err, "failed to read Docker Hub payload");
                return (StatusCode::BAD_REQUEST, "cannot read webhook payload").into_response();
            }
        };

        let payload: PushPayload = match serde_json::from_slice(&body) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "cannot parse Docker Hub payload");
                return (StatusCode::BAD_REQUEST, "cannot parse webhook payload").into_response();
            }
        };

        notify_image_change(api, &payload.repository.repo_name, context.delivery()).await
    }
}

#[cfg(test)]
#[path = "dockerhub_tests.rs"]
mod tests;
