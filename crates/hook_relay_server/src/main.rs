//! HookRelay webhook gateway server.
//!
//! Main binary for running the gateway in production or development.
//!
//! # Environment Variables
//!
//! - `HOOK_RELAY_CONFIG`: Path to the configuration file (default: hooks.toml)
//! - `HOOK_RELAY_PORT`: Port to listen on (default: 8080)
//! - `HOOK_RELAY_HOST`: Host to bind to (default: 0.0.0.0)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::PathBuf;

use hook_relay_core::{compile_endpoints, SourceRegistry};
use hook_relay_server::{
    routes, GatewayConfig, GatewayServer, ServerConfig, DEFAULT_CONFIG_FILENAME, DEFAULT_PORT,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    // Load configuration from environment
    let config_path = PathBuf::from(
        env::var("HOOK_RELAY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILENAME.to_string()),
    );
    let server_config = ServerConfig {
        port: env::var("HOOK_RELAY_PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .expect("Invalid HOOK_RELAY_PORT"),
        host: env::var("HOOK_RELAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
    };

    let config = GatewayConfig::load(&config_path)?;
    let base_dir = GatewayConfig::base_dir(&config_path);

    // Compile every endpoint; a bad endpoint is logged and the process
    // refuses to start, so a partially valid config never serves silently.
    let registry = SourceRegistry::with_default_sources();
    let (compiled, failures) =
        compile_endpoints(&registry, &base_dir, &config.api, &config.endpoints);

    for (endpoint, error) in &failures {
        tracing::error!(
            source = %endpoint.source,
            key_path = %endpoint.key_path,
            %error,
            "failed to compile endpoint"
        );
    }
    if !failures.is_empty() {
        anyhow::bail!(hook_relay_server::Error::EndpointCompilation {
            failed: failures.len(),
            total: config.endpoints.len(),
        });
    }

    tracing::info!("Starting HookRelay webhook gateway");
    tracing::info!("Control plane API: {}", config.api);
    tracing::info!("Serving {} webhook endpoint(s)", compiled.len());

    let router = routes::create_router(compiled);
    GatewayServer::new(server_config, router).serve().await
}
