//! The source-handler contract and the per-endpoint dispatcher.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::Request;
use axum::response::Response;

use upstream_client::ChangeNotifier;

use crate::context::HookContext;

/// Behavior that validates and interprets one source's payload format.
///
/// One implementation exists per external source type (Docker Hub, Quay,
/// ...). The set is open: new sources are added by implementing this trait
/// and registering the implementation in a [`SourceRegistry`]; the compiler
/// and router are unaffected.
///
/// Implementations must never panic on malformed input — they answer with a
/// client-error status and a diagnostic log line instead. Their only side
/// effects are writing the HTTP response and, on success, notifying the
/// control plane.
///
/// [`SourceRegistry`]: crate::registry::SourceRegistry
#[async_trait]
pub trait SourceHandler: Send + Sync {
    /// The name endpoints use to select this source in configuration.
    fn source_name(&self) -> &'static str;

    /// Validate the inbound delivery and, if it names an artifact, notify
    /// the control plane.
    async fn handle(
        &self,
        api: &dyn ChangeNotifier,
        context: &HookContext,
        request: Request,
    ) -> Response;
}

/// A compiled endpoint's dispatch closure.
///
/// Bundles the resolved source handler with the endpoint's context and
/// upstream client. Everything inside is immutable and behind `Arc`, so the
/// dispatcher clones cheaply into the router and concurrent dispatches run
/// without synchronization. Dispatch performs no file I/O; the only network
/// activity is the handler's own upstream call.
#[derive(Clone)]
pub struct HookDispatcher {
    handler: Arc<dyn SourceHandler>,
    context: Arc<HookContext>,
    api: Arc<dyn ChangeNotifier>,
}

impl HookDispatcher {
    /// Bundle a handler, its context, and an upstream client.
    pub fn new(
        handler: Arc<dyn SourceHandler>,
        context: HookContext,
        api: Arc<dyn ChangeNotifier>,
    ) -> Self {
        Self {
            handler,
            context: Arc::new(context),
            api,
        }
    }

    /// Hand one inbound request to the source handler.
    pub async fn dispatch(&self, request: Request) -> Response {
        self.handler
            .handle(self.api.as_ref(), &self.context, request)
            .await
    }
}
