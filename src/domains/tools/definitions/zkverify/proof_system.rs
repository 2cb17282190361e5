//! Proof system information tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{empty, parse_params, text_result};
use crate::domains::docs::ContentResolver;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ProofSystemParams {
    #[schemars(description = "Proof system: groth16, fflonk, risc0")]
    #[serde(default = "empty")]
    pub proof_type: String,
}

#[derive(Debug, Clone)]
pub struct ProofSystemTool;

impl ProofSystemTool {
    pub const NAME: &'static str = "get_proof_system_info";

    pub const DESCRIPTION: &'static str =
        "Get detailed information about a specific proof system supported by zkVerify.";

    #[instrument(skip(resolver))]
    pub async fn execute(params: &ProofSystemParams, resolver: &ContentResolver) -> CallToolResult {
        info!("Getting proof system info for: {}", params.proof_type);
        let body = resolver
            .resolve(&resolver.catalog().proof_systems, &params.proof_type)
            .await;
        text_result(body)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        resolver: Arc<ContentResolver>,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let params: ProofSystemParams = super::common::parse_http_params(arguments)?;
        Ok(super::common::http_result(
            Self::execute(&params, &resolver).await,
        ))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ProofSystemParams>(),
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
                let params: ProofSystemParams = parse_params(args)?;
                Ok(Self::execute(&params, &resolver).await)
            }
            .boxed()
        })
    }
}
