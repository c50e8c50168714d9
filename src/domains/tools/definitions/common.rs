//! Common helpers shared across tool definitions.
//!
//! Result shaping for the MCP boundary: success payloads are pretty-printed
//! JSON, failures are `isError` results whose text begins with `Error: ` so
//! callers can key off the flag without string parsing.

use rmcp::model::{CallToolResult, Content};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::domains::pos::PosError;
use crate::domains::tools::ToolError;

/// Create an error-flagged result with an `Error: `-prefixed message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(format!("Error: {}", message))])
}

/// Create a success result carrying the upstream JSON, pretty-printed.
pub fn json_result(value: &Value) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&format!("Failed to serialize response: {}", e)),
    }
}

/// Convert a gateway outcome into a CallToolResult.
pub fn pos_result(outcome: Result<Value, PosError>) -> CallToolResult {
    match outcome {
        Ok(value) => json_result(&value),
        Err(e) => error_result(&e.to_string()),
    }
}

/// Deserialize raw MCP arguments into a tool's parameter struct.
///
/// Required fields and enum constraints are enforced here, at the dispatch
/// boundary; optional fields simply stay absent.
pub fn parse_params<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments)
        .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", tool, e)))
}
