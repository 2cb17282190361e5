//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::{
    FetchDocsTool, NetworkInfoTool, ProofSystemTool, RelayerTool, SdkCodeTool, TutorialTool,
    VerificationCostTool,
};
#[cfg(feature = "http")]
use super::error::ToolError;
use crate::domains::docs::ContentResolver;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    resolver: Arc<ContentResolver>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(resolver: Arc<ContentResolver>) -> Self {
        Self { resolver }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            FetchDocsTool::NAME,
            ProofSystemTool::NAME,
            NetworkInfoTool::NAME,
            SdkCodeTool::NAME,
            VerificationCostTool::NAME,
            TutorialTool::NAME,
            RelayerTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            FetchDocsTool::to_tool(),
            ProofSystemTool::to_tool(),
            NetworkInfoTool::to_tool(),
            SdkCodeTool::to_tool(),
            VerificationCostTool::to_tool(),
            TutorialTool::to_tool(),
            RelayerTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let resolver = self.resolver.clone();
        match name {
            FetchDocsTool::NAME => FetchDocsTool::http_handler(arguments, resolver).await,
            ProofSystemTool::NAME => ProofSystemTool::http_handler(arguments, resolver).await,
            NetworkInfoTool::NAME => NetworkInfoTool::http_handler(arguments, resolver).await,
            SdkCodeTool::NAME => SdkCodeTool::http_handler(arguments, resolver).await,
            VerificationCostTool::NAME => {
                VerificationCostTool::http_handler(arguments, resolver).await
            }
            TutorialTool::NAME => TutorialTool::http_handler(arguments, resolver).await,
            RelayerTool::NAME => RelayerTool::http_handler(arguments, resolver).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::docs::testing::{ScriptedSource, resolver_with};

    fn registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(resolver_with(Arc::new(ScriptedSource::new()))))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = registry().tool_names();
        assert_eq!(
            names,
            vec![
                "fetch_zkverify_docs",
                "get_proof_system_info",
                "get_network_info",
                "generate_sdk_code",
                "calculate_verification_cost",
                "get_tutorial",
                "explore_relayer_api",
            ]
        );
    }

    #[test]
    fn test_metadata_matches_names() {
        let names = registry().tool_names();
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), names.len());
        for (tool, name) in tools.iter().zip(names) {
            assert_eq!(tool.name, name);
            assert!(tool.description.is_some());
        }
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_network_default() {
        let result = registry()
            .call_tool("get_network_info", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result["isError"], false);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("wss://testnet-rpc.zkverify.io"));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_validation_error() {
        let result = registry()
            .call_tool("calculate_verification_cost", serde_json::json!({ "proof_system": "groth16", "num_proofs": "abc" }))
            .await
            .unwrap();
        assert_eq!(result["isError"], true);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_bad_arguments() {
        let result = registry()
            .call_tool("get_tutorial", serde_json::json!({ "tutorial_type": 7 }))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let result = registry().call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
