//! HTTP client for the change-notification endpoint.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::errors::{UpstreamError, UpstreamResult};
use crate::models::ChangeEvent;

/// The control-plane capability the gateway depends on.
///
/// Implementations deliver a [`ChangeEvent`] and report whether the control
/// plane accepted it. Callers bound the call with a timeout and cancel it by
/// dropping the returned future; implementations must not outlive their
/// caller's interest in the result.
#[async_trait]
pub trait ChangeNotifier: Send + Sync {
    /// Deliver one change event to the control plane.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Transport`] if the request never completed
    /// and [`UpstreamError::Api`] if the control plane answered with a
    /// non-success status.
    async fn notify_change(&self, change: ChangeEvent) -> UpstreamResult<()>;
}

/// reqwest-backed [`ChangeNotifier`] speaking the v9 notification endpoint.
///
/// One client is built per compiled endpoint during endpoint compilation and
/// shared by every dispatch of that endpoint. The client is read-only after
/// construction, so concurrent dispatches need no synchronization.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    notify_url: Url,
}

impl UpstreamClient {
    /// Create a client bound to the control plane's API base URL.
    ///
    /// `base_url` is the API root, e.g. `http://flux:3030/api/flux`; the
    /// client posts change events to `{base_url}/v9/notify`. No credential
    /// is attached.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::InvalidBaseUrl`] if the resulting URL does
    /// not parse as an absolute URL.
    pub fn new(base_url: &str) -> UpstreamResult<Self> {
        let trimmed = base_url.trim_end_matches('/');
        let notify_url = Url::parse(&format!("{trimmed}/v9/notify")).map_err(|err| {
            UpstreamError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: err.to_string(),
            }
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            notify_url,
        })
    }

    /// The fully resolved notification URL this client posts to.
    pub fn notify_url(&self) -> &Url {
        &self.notify_url
    }
}

#[async_trait]
impl ChangeNotifier for UpstreamClient {
    async fn notify_change(&self, change: ChangeEvent) -> UpstreamResult<()> {
        let response = self
            .http
            .post(self.notify_url.clone())
            .json(&change)
            .send()
            .await
            .map_err(|err| UpstreamError::Transport {
                url: self.notify_url.to_string(),
                reason: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                url: self.notify_url.to_string(),
            });
        }

        debug!(url = %self.notify_url, "delivered change notification");
        Ok(())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
