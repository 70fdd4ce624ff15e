//! Client for the delivery control plane's change-notification API.
//!
//! The control plane exposes a single operation the gateway cares about:
//! "something changed, go reconcile". This crate provides the
//! [`ChangeNotifier`] trait used by the rest of the workspace, the wire
//! models for change events, and [`UpstreamClient`], an HTTP implementation
//! that speaks the control plane's v9 notification endpoint.
//!
//! The client attaches no credential; the gateway relies on network placement
//! toward the control plane, and on capability URLs toward its own callers.

pub mod client;
pub mod errors;
pub mod models;

pub use client::{ChangeNotifier, UpstreamClient};
pub use errors::{UpstreamError, UpstreamResult};
pub use models::{ChangeEvent, ChangeKind, ChangeSource, ImageUpdate};
