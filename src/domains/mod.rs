//! Domains module containing business logic organized by bounded contexts.
//!
//! - **docs**: fetching, extraction and resolution of zkVerify documentation
//! - **tools**: MCP tools built on the docs domain
//! - **resources**: `zkverify://` resources built on the docs domain

pub mod docs;
pub mod resources;
pub mod tools;
