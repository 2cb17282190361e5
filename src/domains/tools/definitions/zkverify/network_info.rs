//! Network information tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{parse_params, text_result};
use crate::domains::docs::ContentResolver;

fn default_network() -> String {
    "testnet".to_string()
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NetworkInfoParams {
    #[schemars(description = "Network: testnet or mainnet (default: testnet)")]
    #[serde(default = "default_network")]
    pub network: String,
}

impl Default for NetworkInfoParams {
    fn default() -> Self {
        Self {
            network: default_network(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NetworkInfoTool;

impl NetworkInfoTool {
    pub const NAME: &'static str = "get_network_info";

    pub const DESCRIPTION: &'static str = "Get zkVerify network information including RPC endpoints, explorer, and faucet links.";

    /// Endpoint fields in a live answer are scraped heuristically from the
    /// first page that mentions RPC endpoints.
    #[instrument(skip(resolver))]
    pub async fn execute(params: &NetworkInfoParams, resolver: &ContentResolver) -> CallToolResult {
        info!("Getting network info for: {}", params.network);
        let body = resolver
            .resolve(&resolver.catalog().networks, &params.network)
            .await;
        text_result(body)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        resolver: Arc<ContentResolver>,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let params: NetworkInfoParams = super::common::parse_http_params(arguments)?;
        Ok(super::common::http_result(
            Self::execute(&params, &resolver).await,
        ))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<NetworkInfoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(resolver: Arc<ContentResolver>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let resolver = resolver.clone();
            async move {
                let params: NetworkInfoParams = parse_params(args)?;
                Ok(Self::execute(&params, &resolver).await)
            }
            .boxed()
        })
    }
}
