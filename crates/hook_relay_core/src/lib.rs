//! HookRelay core: endpoint-to-handler compilation and dispatch.
//!
//! External registries push "new artifact" webhooks to unguessable per-tenant
//! URLs. This crate turns a declarative endpoint configuration (source type,
//! secret key, registry host) into:
//!
//! - a routing digest — the unguessable path segment that both routes and
//!   implicitly authenticates a delivery, and
//! - a dispatcher that, per inbound request, hands the raw HTTP exchange to
//!   the configured source handler, which normalizes the payload and forwards
//!   an "image changed" event to the control plane under a bounded deadline.
//!
//! Security comes from URL-path secrecy (capability URLs), not per-request
//! signing. Everything compiled here is immutable after compilation, so
//! concurrent dispatches share it without locking.
//!
//! # Adding a source
//!
//! Implement [`SourceHandler`] for the new source type and register it in
//! [`SourceRegistry::with_default_sources`] (or a custom registry). The
//! compiler and router need no changes.

pub mod context;
pub mod endpoint;
pub mod errors;
pub mod handler;
pub mod image_ref;
pub mod notifier;
pub mod registry;
pub mod sources;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::{DeliveryPolicy, HookContext};
pub use endpoint::{compile_endpoint, compile_endpoints, CompiledEndpoint, Endpoint};
pub use errors::{CompileError, CompileResult, ImageRefError};
pub use handler::{HookDispatcher, SourceHandler};
pub use image_ref::ImageRef;
pub use notifier::{notify_image_change, NOTIFY_TIMEOUT};
pub use registry::SourceRegistry;
