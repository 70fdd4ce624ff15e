//! Endpoint compilation and payload error types.

use thiserror::Error;

/// Errors raised while compiling an endpoint configuration.
///
/// These are configuration errors: they abort compilation of the one
/// endpoint they occur in and never arise at request time. Each variant
/// names the offending value so an operator can find it in the config file.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("unknown source {name:?}, known sources: {known}")]
    UnknownSource { name: String, known: String },

    #[error("cannot load key from {path:?}: {reason}")]
    KeyUnreadable { path: String, reason: String },

    #[error("invalid control plane URL {url:?}: {reason}")]
    InvalidApiUrl { url: String, reason: String },
}

/// Result type alias for endpoint compilation.
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors raised while parsing an image reference from a webhook payload.
///
/// Recovered locally: the handler answers HTTP 400 and no upstream call is
/// made. The offending input is carried for the diagnostic log line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageRefError {
    #[error("image reference is empty")]
    Empty,

    #[error("invalid character in image reference {reference:?}")]
    InvalidCharacter { reference: String },

    #[error("invalid tag in image reference {reference:?}")]
    InvalidTag { reference: String },
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
