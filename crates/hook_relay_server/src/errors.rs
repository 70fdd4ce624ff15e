//! Gateway process error types.

use thiserror::Error;

/// Errors fatal to gateway startup.
///
/// Request-time failures never surface here; they are answered with HTTP
/// status codes by the dispatch path and must not crash the process.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read configuration file {path:?}: {reason}")]
    ConfigRead { path: String, reason: String },

    #[error("cannot parse configuration file {path:?}: {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("unsupported configuration version {found}, this gateway expects {expected}")]
    UnsupportedConfigVersion { found: u32, expected: u32 },

    #[error("{failed} of {total} endpoint(s) failed to compile")]
    EndpointCompilation { failed: usize, total: usize },
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
