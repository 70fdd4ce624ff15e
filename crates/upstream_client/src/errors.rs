//! Control-plane client error types.

use thiserror::Error;

/// Errors produced when talking to the control plane.
///
/// These cover the two ways a notification can fail: the request never
/// completed (transport), or the control plane answered with a non-success
/// status (api). Configuration problems are caught when the client is
/// constructed, before any request is made.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("invalid control plane URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to reach control plane at {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("control plane returned status {status} from {url}")]
    Api { status: u16, url: String },
}

/// Result type alias for control-plane operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
