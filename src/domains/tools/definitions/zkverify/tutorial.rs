//! Step-by-step tutorial lookup tool.

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
pub struct TutorialParams {
    #[schemars(description = "Tutorial: first-proof, zkverifyjs, relayer, run-a-node")]
    #[serde(default = "empty")]
    pub tutorial_type: String,
}

#[derive(Debug, Clone)]
pub struct TutorialTool;

impl TutorialTool {
    pub const NAME: &'static str = "get_tutorial";

    pub const DESCRIPTION: &'static str = "Get a step-by-step zkVerify tutorial: first-proof, zkverifyjs, relayer, run-a-node.";

    #[instrument(skip(resolver))]
    pub async fn execute(params: &TutorialParams, resolver: &ContentResolver) -> CallToolResult {
        info!("Getting tutorial: {}", params.tutorial_type);
        let body = resolver
            .resolve(&resolver.catalog().tutorials, &params.tutorial_type)
            .await;
        text_result(body)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        resolver: Arc<ContentResolver>,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let params: TutorialParams = super::common::parse_http_params(arguments)?;
        Ok(super::common::http_result(
            Self::execute(&params, &resolver).await,
        ))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TutorialParams>(),
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
                let params: TutorialParams = parse_params(args)?;
                Ok(Self::execute(&params, &resolver).await)
            }
            .boxed()
        })
    }
}
