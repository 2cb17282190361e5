//! Relayer API exploration tool.

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

fn default_topic() -> String {
    "overview".to_string()
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RelayerParams {
    #[schemars(description = "Relayer API topic: overview, submit-proof, job-status (default: overview)")]
    #[serde(default = "default_topic")]
    pub topic: String,
}

#[derive(Debug, Clone)]
pub struct RelayerTool;

impl RelayerTool {
    pub const NAME: &'static str = "explore_relayer_api";

    pub const DESCRIPTION: &'static str = "Explore the zkVerify relayer REST API (mainnet docs first, then testnet): overview, submit-proof, job-status.";

    #[instrument(skip(resolver))]
    pub async fn execute(params: &RelayerParams, resolver: &ContentResolver) -> CallToolResult {
        info!("Exploring relayer API topic: {}", params.topic);
        let body = resolver
            .resolve(&resolver.catalog().relayer, &params.topic)
            .await;
        text_result(body)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        resolver: Arc<ContentResolver>,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let params: RelayerParams = super::common::parse_http_params(arguments)?;
        Ok(super::common::http_result(
            Self::execute(&params, &resolver).await,
        ))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<RelayerParams>(),
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
                let params: RelayerParams = parse_params(args)?;
                Ok(Self::execute(&params, &resolver).await)
            }
            .boxed()
        })
    }
}
