//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. Registered
//! resources resolve against the catalog's resource table; URIs under
//! `zkverify://docs/` resolve against the documentation sections table.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::{DOCS_SECTION_PREFIX, get_all_resource_templates, get_all_resources};
use crate::domains::docs::ContentResolver;

/// Service for managing and accessing resources.
pub struct ResourceService {
    resolver: Arc<ContentResolver>,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Where a resource's text comes from.
#[derive(Debug, Clone, Copy)]
pub enum ResourceContent {
    /// A key of the catalog's resource table.
    Docs(&'static str),
}

impl ResourceService {
    /// Create a new ResourceService backed by `resolver`.
    pub fn new(resolver: Arc<ContentResolver>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            resolver,
            resources: HashMap::new(),
            templates: get_all_resource_templates(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources, ordered by URI.
    pub async fn list_resources(&self) -> Vec<Resource> {
        let mut resources: Vec<Resource> = self
            .resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect();
        resources.sort_by(|a, b| a.raw.uri.cmp(&b.raw.uri));
        resources
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let catalog = self.resolver.catalog();

        let resolved = if let Some(entry) = self.resources.get(uri) {
            let ResourceContent::Docs(key) = entry.content;
            self.resolver.resolve_content(&catalog.resources, key).await
        } else if let Some(section) = uri.strip_prefix(DOCS_SECTION_PREFIX) {
            if section.trim().is_empty() {
                return Err(ResourceError::invalid_uri(uri));
            }
            self.resolver.resolve_content(&catalog.sections, section).await
        } else {
            return Err(ResourceError::not_found(uri));
        };

        let content = resolved.map_err(|e| {
            debug!("Resource {} rejected: {}", uri, e);
            ResourceError::not_found(uri)
        })?;
        debug!("Resource {} served from {}", uri, content.source);

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(content.body, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DocsConfig;
    use crate::domains::docs::Catalog;
    use crate::domains::docs::testing::ScriptedSource;

    fn service_with(source: Arc<ScriptedSource>) -> ResourceService {
        let catalog = Catalog::from_config(&DocsConfig::default());
        ResourceService::new(Arc::new(ContentResolver::new(source, catalog)))
    }

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_lists_registered_resources() {
        let service = service_with(Arc::new(ScriptedSource::new()));
        let uris: Vec<_> = service
            .list_resources()
            .await
            .into_iter()
            .map(|r| r.raw.uri)
            .collect();
        assert_eq!(
            uris,
            vec![
                "zkverify://architecture",
                "zkverify://overview",
                "zkverify://sdk",
                "zkverify://tutorials",
            ]
        );
    }

    #[tokio::test]
    async fn test_read_overview_live() {
        let source = Arc::new(
            ScriptedSource::new().respond("https://docs.zkverify.io/", "zkVerify is a modular L1"),
        );
        let service = service_with(source);

        let result = service.read_resource("zkverify://overview").await.unwrap();
        let text = text_of(&result);
        assert!(text.starts_with("# zkVerify Overview (Live from Docs)"));
        assert!(text.contains("zkVerify is a modular L1"));
        assert!(text.contains("Source: https://docs.zkverify.io/"));
    }

    #[tokio::test]
    async fn test_read_sdk_uses_second_candidate() {
        let source = Arc::new(ScriptedSource::new().respond(
            "https://docs.zkverify.io/overview/getting-started",
            "Getting started with zkverifyjs",
        ));
        let service = service_with(source.clone());

        let result = service.read_resource("zkverify://sdk").await.unwrap();
        assert!(text_of(&result).contains("Getting started with zkverifyjs"));
        assert_eq!(source.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_read_architecture_fallback() {
        let service = service_with(Arc::new(ScriptedSource::new()));

        let result = service.read_resource("zkverify://architecture").await.unwrap();
        let text = text_of(&result);
        assert!(text.starts_with("# zkVerify Architecture (Cached)"));
        assert!(text.contains("GRANDPA + BABE"));
        assert!(text.ends_with("⚠️ Note: Using cached data. Live fetch failed."));
    }

    #[tokio::test]
    async fn test_read_docs_section_template() {
        let source = Arc::new(ScriptedSource::new().respond(
            "https://docs.zkverify.io/node-operators/getting_started",
            "Run a node",
        ));
        let service = service_with(source);

        let result = service
            .read_resource("zkverify://docs/node-operators")
            .await
            .unwrap();
        assert!(text_of(&result).contains("✅ Documentation for 'node-operators'"));
    }

    #[tokio::test]
    async fn test_unknown_section_is_not_found_without_fetching() {
        let source = Arc::new(ScriptedSource::new());
        let service = service_with(source.clone());

        let result = service.read_resource("zkverify://docs/pricing").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_section_is_invalid_uri() {
        let service = service_with(Arc::new(ScriptedSource::new()));
        let result = service.read_resource("zkverify://docs/").await;
        assert!(matches!(result, Err(ResourceError::InvalidUri(_))));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = service_with(Arc::new(ScriptedSource::new()));
        let result = service.read_resource("zkverify://nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
