//! Shared utilities for the documentation tools.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domains::docs::resolver::ERROR_MARKER;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Wrap a tool's text output. Messages carrying the error marker are
/// validation failures and are flagged as errors.
pub fn text_result(body: String) -> CallToolResult {
    if body.starts_with(ERROR_MARKER) {
        debug!("Validation failed: {}", body.lines().next().unwrap_or_default());
        CallToolResult::error(vec![Content::text(body)])
    } else {
        CallToolResult::success(vec![Content::text(body)])
    }
}

/// Deserialize rmcp call arguments into a parameter struct.
pub fn parse_params<T: DeserializeOwned>(args: JsonObject) -> Result<T, McpError> {
    serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Deserialize HTTP call arguments into a parameter struct.
#[cfg(feature = "http")]
pub fn parse_http_params<T: DeserializeOwned>(arguments: serde_json::Value) -> Result<T, ToolError> {
    let arguments = if arguments.is_null() {
        serde_json::Value::Object(Default::default())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// JSON body returned to HTTP clients.
#[cfg(feature = "http")]
pub fn http_result(result: CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

/// Default for optional string parameters.
pub fn empty() -> String {
    String::new()
}
