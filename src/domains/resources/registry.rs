//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, ResourceTemplate};

use super::definitions::{
    ArchitectureResource, OverviewResource, ResourceDefinition, SdkResource, TutorialsResource,
};
use super::service::ResourceEntry;

/// URI template for documentation sections.
pub const DOCS_SECTION_TEMPLATE: &str = "zkverify://docs/{section}";

/// Prefix matched by [`DOCS_SECTION_TEMPLATE`].
pub const DOCS_SECTION_PREFIX: &str = "zkverify://docs/";

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all registered resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<OverviewResource>(),
        build_resource::<ArchitectureResource>(),
        build_resource::<SdkResource>(),
        build_resource::<TutorialsResource>(),
    ]
}

/// Get all registered resource templates.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: DOCS_SECTION_TEMPLATE.to_string(),
            name: "zkVerify Documentation Section".to_string(),
            title: Some("Documentation Section".to_string()),
            description: Some(
                "Live documentation section: overview, architecture, developers, node-operators, testnet"
                    .to_string(),
            ),
            mime_type: Some("text/markdown".to_string()),
        }
        .no_annotation(),
    ]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![
        OverviewResource::URI,
        ArchitectureResource::URI,
        SdkResource::URI,
        TutorialsResource::URI,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::docs::catalog::RESOURCE_KEYS;
    use crate::domains::resources::ResourceContent;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 4);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert_eq!(uris, resource_uris());
    }

    #[test]
    fn test_resources_map_to_catalog_keys() {
        for entry in get_all_resources() {
            let ResourceContent::Docs(key) = entry.content;
            assert!(RESOURCE_KEYS.contains(&key), "unmapped key {}", key);
            assert_eq!(entry.resource.raw.uri, format!("zkverify://{}", key));
            assert_eq!(entry.resource.raw.mime_type.as_deref(), Some("text/markdown"));
        }
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].raw.uri_template, DOCS_SECTION_TEMPLATE);
        assert!(DOCS_SECTION_TEMPLATE.starts_with(DOCS_SECTION_PREFIX));
    }
}
