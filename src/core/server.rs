//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools and resources domains. Both share a
//! single [`ContentResolver`], so every transport and every session reuses
//! one HTTP client.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/zkverify/` with one file
//! per tool. The ToolRouter is built in `domains/tools/router.rs`; the HTTP
//! transport dispatches through `ToolRegistry` instead.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Error;
use crate::domains::{
    docs::{Catalog, ContentResolver, DocFetcher},
    resources::{ResourceError, ResourceService},
    tools::build_tool_router,
};

#[cfg(feature = "http")]
use crate::domains::tools::{ToolError, ToolRegistry};

/// Instructions sent to clients on initialize.
pub const INSTRUCTIONS: &str = "zkVerify documentation server. Tools fetch live pages from \
docs.zkverify.io and fall back to curated content when the site is unreachable. Use \
fetch_zkverify_docs for documentation sections, get_proof_system_info and get_network_info \
for reference data, generate_sdk_code for zkverifyjs snippets, calculate_verification_cost \
for cost comparisons, get_tutorial for guides and explore_relayer_api for the relayer. \
Resources under zkverify:// expose the same documentation.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,

    /// Shared resolver behind every tool and resource.
    resolver: Arc<ContentResolver>,

    resource_service: Arc<ResourceService>,

    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server backed by the live documentation site.
    ///
    /// Fails when the documentation base URL is not an http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(config: Config) -> crate::Result<Self> {
        let base_url = &config.docs.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::config(format!(
                "documentation base URL must be http(s): {}",
                base_url
            )));
        }

        let fetcher = DocFetcher::new(&config.docs)?;
        let catalog = Catalog::from_config(&config.docs);
        let resolver = Arc::new(ContentResolver::new(Arc::new(fetcher), catalog));

        Ok(Self::with_resolver(config, resolver))
    }

    /// Create a server around an existing resolver.
    pub fn with_resolver(config: Config, resolver: Arc<ContentResolver>) -> Self {
        info!(
            "Serving documentation from {}",
            resolver.catalog().home_url
        );

        Self {
            tool_router: build_tool_router::<Self>(resolver.clone()),
            resource_service: Arc::new(ResourceService::new(resolver.clone())),
            config: Arc::new(config),
            resolver,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// The resolver shared by tools and resources.
    pub fn resolver(&self) -> &Arc<ContentResolver> {
        &self.resolver
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        ToolRegistry::new(self.resolver.clone())
            .call_tool(name, arguments)
            .await
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.raw.uri,
                    "name": r.raw.name,
                    "description": r.raw.description,
                    "mimeType": r.raw.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(
        &self,
        uri: &str,
    ) -> Result<serde_json::Value, ResourceError> {
        let result = self.resource_service.read_resource(uri).await?;
        Ok(serde_json::json!({
            "contents": result.contents
        }))
    }

    /// List all available resource templates (for HTTP transport).
    pub async fn list_resource_templates(&self) -> Vec<serde_json::Value> {
        let templates = self.resource_service.list_resource_templates().await;

        templates
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "uriTemplate": t.raw.uri_template,
                    "name": t.raw.name,
                    "title": t.raw.title,
                    "description": t.raw.description,
                    "mimeType": t.raw.mime_type
                })
            })
            .collect()
    }
}

/// Map resource errors onto MCP error codes.
fn resource_error(err: ResourceError) -> McpError {
    match err {
        ResourceError::InvalidUri(_) => McpError::invalid_params(err.to_string(), None),
        ResourceError::NotFound(_) => McpError::resource_not_found(err.to_string(), None),
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(resource_error)
    }
}
