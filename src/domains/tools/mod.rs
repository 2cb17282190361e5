//! Tools domain module.
//!
//! Tools are the callable side of the documentation proxy. Each one validates
//! its string parameters, then resolves content through the shared
//! [`ContentResolver`](crate::domains::docs::ContentResolver).
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/zkverify/`
//! 2. Define params, execute(), http_handler() and create_route()
//! 3. Export in `definitions/zkverify/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs` for HTTP support

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
