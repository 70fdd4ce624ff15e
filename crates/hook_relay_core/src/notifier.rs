//! The shared final step of every source handler: notify the control plane.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use upstream_client::{ChangeEvent, ChangeNotifier};

use crate::context::DeliveryPolicy;
use crate::image_ref::ImageRef;

/// Upper bound on the upstream notification call.
pub const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Parse an image reference from a payload, forward an "image changed"
/// event, and answer the webhook caller.
///
/// An unparseable reference answers 400 and makes no upstream call. A
/// parseable one is sent upstream bounded by [`NOTIFY_TIMEOUT`]; whether a
/// failed or timed-out delivery still answers 200 (best effort, the
/// default) or 502 is the endpoint's [`DeliveryPolicy`].
///
/// The timeout future is dropped on every exit path, which both releases
/// the timer and cancels the in-flight upstream call. If the inbound
/// connection is closed first, the server drops this whole future and the
/// same cleanup applies, so the upstream call never outlives min(inbound
/// request, 10 s).
pub async fn notify_image_change(
    api: &dyn ChangeNotifier,
    image: &str,
    delivery: DeliveryPolicy,
) -> Response {
    let reference = match ImageRef::parse(image) {
        Ok(reference) => reference,
        Err(err) => {
            warn!(image = %image, error = %err, "cannot parse image in webhook payload");
            return (
                StatusCode::BAD_REQUEST,
                "cannot parse image in webhook payload",
            )
                .into_response();
        }
    };

    let name = reference.name();
    let change = ChangeEvent::image_changed(name.clone());

    match tokio::time::timeout(NOTIFY_TIMEOUT, api.notify_change(change)).await {
        Ok(Ok(())) => StatusCode::OK.into_response(),
        Ok(Err(err)) => {
            error!(image = %name, error = %err, "change notification failed");
            delivery_failure_response(delivery)
        }
        Err(_elapsed) => {
            error!(image = %name, timeout_secs = NOTIFY_TIMEOUT.as_secs(), "change notification timed out");
            delivery_failure_response(delivery)
        }
    }
}

fn delivery_failure_response(delivery: DeliveryPolicy) -> Response {
    match delivery {
        DeliveryPolicy::BestEffort => StatusCode::OK.into_response(),
        DeliveryPolicy::Strict => (
            StatusCode::BAD_GATEWAY,
            "failed to notify the control plane",
        )
            .into_response(),
    }
}

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod tests;
