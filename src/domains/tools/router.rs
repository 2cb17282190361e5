//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; every route shares the same
//! resolver.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    FetchDocsTool, NetworkInfoTool, ProofSystemTool, RelayerTool, SdkCodeTool, TutorialTool,
    VerificationCostTool,
};
use crate::domains::docs::ContentResolver;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(resolver: Arc<ContentResolver>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(FetchDocsTool::create_route(resolver.clone()))
        .with_route(ProofSystemTool::create_route(resolver.clone()))
        .with_route(NetworkInfoTool::create_route(resolver.clone()))
        .with_route(SdkCodeTool::create_route(resolver.clone()))
        .with_route(VerificationCostTool::create_route(resolver.clone()))
        .with_route(TutorialTool::create_route(resolver.clone()))
        .with_route(RelayerTool::create_route(resolver))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::domains::docs::testing::{ScriptedSource, resolver_with};

    struct TestServer {}

    fn test_resolver() -> Arc<ContentResolver> {
        Arc::new(resolver_with(Arc::new(ScriptedSource::new())))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_resolver());
        let tools = router.list_all();
        assert_eq!(tools.len(), 7);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"fetch_zkverify_docs"));
        assert!(names.contains(&"get_network_info"));
        assert!(names.contains(&"calculate_verification_cost"));
        assert!(names.contains(&"explore_relayer_api"));
    }

    #[test]
    fn test_registry_matches_router() {
        let resolver = test_resolver();
        let registry = ToolRegistry::new(resolver.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(resolver);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
