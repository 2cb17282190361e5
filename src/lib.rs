//! zkVerify documentation MCP server.
//!
//! A Model Context Protocol server that proxies the zkVerify documentation
//! site. Tools and resources fetch live pages and fall back to curated
//! content when the site is unreachable, so clients always get an answer.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **docs**: fetcher, content resolver, catalog and curated data
//!   - **tools**: the seven documentation tools
//!   - **resources**: `zkverify://` resources and the docs section template
//!
//! # Example
//!
//! ```rust,no_run
//! use zkverify_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
