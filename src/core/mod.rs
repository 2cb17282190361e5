//! Core module containing shared infrastructure components.
//!
//! Configuration, error types, the MCP server handler and the transport
//! layer that carries it.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{Config, DocsConfig, LoggingConfig};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
