//! Live documentation section tool.

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

/// Parameters for fetching a documentation section.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FetchDocsParams {
    #[schemars(
        description = "Documentation section: overview, architecture, developers, node-operators, testnet"
    )]
    #[serde(default = "empty")]
    pub section: String,
}

#[derive(Debug, Clone)]
pub struct FetchDocsTool;

impl FetchDocsTool {
    pub const NAME: &'static str = "fetch_zkverify_docs";

    pub const DESCRIPTION: &'static str = "Fetch live documentation from zkVerify docs - sections: overview, architecture, developers, node-operators, testnet.";

    /// Fetch the section page. There is no cached copy; when the site is
    /// unreachable the result points at the page instead.
    #[instrument(skip(resolver))]
    pub async fn execute(params: &FetchDocsParams, resolver: &ContentResolver) -> CallToolResult {
        info!("Fetching zkVerify documentation for section: {}", params.section);
        let body = resolver
            .resolve(&resolver.catalog().sections, &params.section)
            .await;
        text_result(body)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        resolver: Arc<ContentResolver>,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let params: FetchDocsParams = super::common::parse_http_params(arguments)?;
        Ok(super::common::http_result(
            Self::execute(&params, &resolver).await,
        ))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<FetchDocsParams>(),
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
                let params: FetchDocsParams = parse_params(args)?;
                Ok(Self::execute(&params, &resolver).await)
            }
            .boxed()
        })
    }
}
