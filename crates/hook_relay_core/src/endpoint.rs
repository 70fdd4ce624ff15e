//! Endpoint configuration and compilation.
//!
//! Compilation is the capability-URL issuance step: it turns a declarative
//! endpoint record into the unguessable routing digest and the dispatcher
//! the router registers under it. All file I/O (reading the secret key)
//! happens here, once; dispatch never touches the filesystem.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use upstream_client::UpstreamClient;

use crate::context::{DeliveryPolicy, HookContext};
use crate::errors::{CompileError, CompileResult};
use crate::handler::HookDispatcher;
use crate::registry::SourceRegistry;

/// One webhook endpoint as declared in the gateway's configuration file.
///
/// ```toml
/// [[endpoints]]
/// source = "DockerHub"
/// key_path = "dockerhub_key"
/// registry_host = "index.docker.io"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Endpoint {
    /// Which source handler interprets deliveries to this endpoint. Must
    /// name a registered source.
    pub source: String,

    /// Path to the secret key file, relative to the configuration base
    /// directory.
    pub key_path: String,

    /// The external registry host this endpoint is scoped to.
    pub registry_host: String,

    /// Surface upstream delivery failures to the webhook caller as 502
    /// instead of the default best-effort 200.
    #[serde(default)]
    pub strict_delivery: bool,
}

/// The product of compiling one endpoint: its routing digest and the
/// dispatcher to register under `/hook/{digest}`.
pub struct CompiledEndpoint {
    digest: String,
    dispatcher: HookDispatcher,
}

impl CompiledEndpoint {
    /// Pair a digest with a dispatcher. Exposed so tests can register
    /// stub-backed endpoints on a router.
    pub fn new(digest: String, dispatcher: HookDispatcher) -> Self {
        Self { digest, dispatcher }
    }

    /// The hex digest that routes (and implicitly authenticates)
    /// deliveries to this endpoint.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// A cheap clone of the dispatch closure for router registration.
    pub fn dispatcher(&self) -> HookDispatcher {
        self.dispatcher.clone()
    }
}

impl std::fmt::Debug for CompiledEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledEndpoint")
            .field("digest", &self.digest)
            .finish_non_exhaustive()
    }
}

/// SHA-256 over the key bytes followed by the registry host, hex encoded.
///
/// Deterministic in (key, host): the digest is the endpoint's capability
/// URL, so recompiling the same configuration must yield the same route.
/// The host goes in *unnormalized* — before trailing-slash stripping — to
/// keep digests bit-compatible with existing deployments' URLs.
pub fn routing_digest(key: &[u8], registry_host: &str) -> String {
    let mut sha = Sha256::new();
    sha.update(key);
    sha.update(registry_host.as_bytes());
    hex::encode(sha.finalize())
}

/// Compile one endpoint into `(digest, dispatcher)`.
///
/// Resolves the source handler, loads the secret key from
/// `base_dir/key_path`, derives the routing digest, and binds an upstream
/// client for `api_url` (no credential attached).
///
/// # Errors
///
/// - [`CompileError::UnknownSource`] when `endpoint.source` is not in the
///   registry, naming the invalid value and the registered alternatives.
/// - [`CompileError::KeyUnreadable`] when the key file cannot be read,
///   naming the path and the I/O cause.
/// - [`CompileError::InvalidApiUrl`] when `api_url` does not parse.
pub fn compile_endpoint(
    registry: &SourceRegistry,
    base_dir: &Path,
    api_url: &str,
    endpoint: &Endpoint,
) -> CompileResult<CompiledEndpoint> {
    let handler = registry
        .lookup(&endpoint.source)
        .ok_or_else(|| CompileError::UnknownSource {
            name: endpoint.source.clone(),
            known: registry.source_names().join(", "),
        })?;

    let key_path = base_dir.join(&endpoint.key_path);
    let key = fs::read(&key_path).map_err(|err| CompileError::KeyUnreadable {
        path: key_path.display().to_string(),
        reason: err.to_string(),
    })?;

    // Digest over the raw host; the context stores the normalized one.
    let digest = routing_digest(&key, &endpoint.registry_host);

    let delivery = if endpoint.strict_delivery {
        DeliveryPolicy::Strict
    } else {
        DeliveryPolicy::BestEffort
    };
    let context = HookContext::new(key, &endpoint.registry_host, delivery);

    let api = UpstreamClient::new(api_url).map_err(|err| CompileError::InvalidApiUrl {
        url: api_url.to_string(),
        reason: err.to_string(),
    })?;

    debug!(
        source = %endpoint.source,
        registry_host = %context.registry_host(),
        "compiled webhook endpoint"
    );

    Ok(CompiledEndpoint::new(
        digest,
        HookDispatcher::new(handler, context, Arc::new(api)),
    ))
}

/// Compile a list of endpoints, fail-isolated.
///
/// One endpoint's configuration error never prevents the others from
/// compiling. Failures come back paired with their endpoint so the caller
/// can report them and decide whether to abort.
pub fn compile_endpoints(
    registry: &SourceRegistry,
    base_dir: &Path,
    api_url: &str,
    endpoints: &[Endpoint],
) -> (Vec<CompiledEndpoint>, Vec<(Endpoint, CompileError)>) {
    let mut compiled = Vec::new();
    let mut failures = Vec::new();

    for endpoint in endpoints {
        match compile_endpoint(registry, base_dir, api_url, endpoint) {
            Ok(ep) => compiled.push(ep),
            Err(err) => {
                warn!(source = %endpoint.source, error = %err, "skipping endpoint");
                failures.push((endpoint.clone(), err));
            }
        }
    }

    (compiled, failures)
}

#[cfg(test)]
#[path = "endpoint_tests.rs"]
mod tests;
