//! Resources domain module.
//!
//! Resources are the fixed `zkverify://` documentation pages plus the
//! `zkverify://docs/{section}` template. Every read goes through the
//! [`ContentResolver`](crate::domains::docs::ContentResolver), so a resource
//! is live documentation when the site answers and curated text otherwise.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resource_templates, get_all_resources, resource_uris};
pub use service::{ResourceContent, ResourceEntry, ResourceService};
