//! Built-in source handlers, one module per external source type.

pub mod dockerhub;
pub mod quay;

/// Largest webhook body a source handler will buffer.
pub(crate) const MAX_BODY_BYTES: usize = 1024 * 1024;
