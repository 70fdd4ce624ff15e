//! Per-endpoint dispatch context.

use std::fmt;

/// What to tell the webhook caller when the upstream notification fails.
///
/// The gateway's historical contract is best-effort: the caller gets 200
/// whether or not the control plane accepted the event, and the failure is
/// only logged. Strict delivery opts an endpoint into surfacing upstream
/// failure or timeout as 502 so the caller can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryPolicy {
    /// Respond 200 regardless of the upstream outcome; log failures.
    #[default]
    BestEffort,
    /// Respond 502 when the upstream call fails or times out.
    Strict,
}

/// The immutable value bundle passed to a source handler on every dispatch.
///
/// Built once during endpoint compilation and shared by all dispatches of
/// that endpoint; never mutated, never persisted. Handlers use it to
/// interpret payloads without re-deriving configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct HookContext {
    key: Vec<u8>,
    registry_host: String,
    delivery: DeliveryPolicy,
}

impl HookContext {
    /// Bundle the endpoint's secret key and registry host.
    ///
    /// Trailing slashes are stripped from the host; handlers always see the
    /// normalized form.
    pub fn new(key: Vec<u8>, registry_host: &str, delivery: DeliveryPolicy) -> Self {
        Self {
            key,
            registry_host: registry_host.trim_end_matches('/').to_string(),
            delivery,
        }
    }

    /// Raw secret key bytes from the endpoint's key file.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// The registry host this endpoint is scoped to, without trailing
    /// slashes.
    pub fn registry_host(&self) -> &str {
        &self.registry_host
    }

    /// How upstream failures are reported to the webhook caller.
    pub fn delivery(&self) -> DeliveryPolicy {
        self.delivery
    }
}

// Manual Debug so the secret key never lands in a log line.
impl fmt::Debug for HookContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookContext")
            .field("key", &"<redacted>")
            .field("registry_host", &self.registry_host)
            .field("delivery", &self.delivery)
            .finish()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
