//! HookRelay HTTP surface and process wiring.
//!
//! This crate exists in the HTTP layer and handles:
//! - loading the gateway configuration file
//! - registering one route per compiled endpoint, path = routing digest
//! - server startup and graceful shutdown
//!
//! The interesting behavior — compiling endpoints and dispatching webhook
//! deliveries — lives in `hook_relay_core`; this crate only wires it to a
//! listening socket.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod server;

pub use config::{GatewayConfig, DEFAULT_CONFIG_FILENAME};
pub use errors::Error;
pub use server::{GatewayServer, ServerConfig};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;
