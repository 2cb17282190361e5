//! Verification cost comparison tool.

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
use crate::domains::docs::cost::{self, CostTable};
use crate::domains::docs::resolver::ERROR_MARKER;

fn default_num_proofs() -> String {
    "1".to_string()
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct VerificationCostParams {
    #[schemars(description = "Proof system: groth16, fflonk, risc0")]
    #[serde(default = "empty")]
    pub proof_system: String,

    #[schemars(description = "Number of proofs to verify (default: 1, max: 10000)")]
    #[serde(default = "default_num_proofs")]
    pub num_proofs: String,
}

#[derive(Debug, Clone)]
pub struct VerificationCostTool;

impl VerificationCostTool {
    pub const NAME: &'static str = "calculate_verification_cost";

    pub const DESCRIPTION: &'static str = "Calculate estimated cost for proof verification on zkVerify versus native blockchain verification.";

    /// Validate, then probe the pricing page for the data-source note. The
    /// figures always come from the built-in rate table.
    #[instrument(skip(resolver))]
    pub async fn execute(
        params: &VerificationCostParams,
        resolver: &ContentResolver,
    ) -> CallToolResult {
        info!(
            "Calculating cost for {} {} proofs",
            params.num_proofs, params.proof_system
        );

        if params.proof_system.trim().is_empty() {
            return text_result(format!(
                "{} Please specify proof system: {}",
                ERROR_MARKER,
                CostTable::available()
            ));
        }

        let count = match cost::parse_proof_count(&params.num_proofs) {
            Ok(count) => count,
            Err(e) => return text_result(format!("{} {}", ERROR_MARKER, e)),
        };

        let Some(table) = CostTable::for_proof_system(&params.proof_system) else {
            return text_result(format!(
                "{} Unknown proof system: {}\n\nAvailable: {}",
                ERROR_MARKER,
                params.proof_system,
                CostTable::available()
            ));
        };

        let catalog = resolver.catalog();
        let pricing = resolver
            .fetch(&catalog.pricing_url, catalog.probe_timeout)
            .await;
        let source = cost::data_source(&pricing);
        if source == cost::SOURCE_DOCUMENTED {
            info!("Found pricing information in docs");
        }

        text_result(table.compare(count).report(source, &catalog.home_url))
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        resolver: Arc<ContentResolver>,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let params: VerificationCostParams = super::common::parse_http_params(arguments)?;
        Ok(super::common::http_result(
            Self::execute(&params, &resolver).await,
        ))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<VerificationCostParams>(),
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
                let params: VerificationCostParams = parse_params(args)?;
                Ok(Self::execute(&params, &resolver).await)
            }
            .boxed()
        })
    }
}
