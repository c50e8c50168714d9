//! Single-order lookup tool.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::domains::pos::TouchBistroClient;

use super::super::common::{error_result, parse_params, pos_result};

/// Parameters for fetching a single order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetOrderParams {
    /// The order identifier.
    #[schemars(description = "The order ID")]
    pub id: String,
}

/// Order lookup tool implementation.
#[derive(Debug, Clone)]
pub struct GetOrderTool;

impl GetOrderTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_order";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get detailed information about a specific order by ID, including all items, modifiers, payments, and discounts";

    /// Parse raw MCP arguments and run the tool.
    pub async fn dispatch(arguments: Value, client: &TouchBistroClient) -> CallToolResult {
        match parse_params::<GetOrderParams>(Self::NAME, arguments) {
            Ok(params) => Self::execute(&params, client).await,
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Execute the tool logic.
    pub async fn execute(params: &GetOrderParams, client: &TouchBistroClient) -> CallToolResult {
        info!("Fetching order {}", params.id);
        pos_result(client.get_order(&params.id).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetOrderParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_required() {
        assert!(serde_json::from_str::<GetOrderParams>("{}").is_err());
    }

    #[test]
    fn test_id_parses() {
        let params: GetOrderParams = serde_json::from_str(r#"{"id": "ord-42"}"#).unwrap();
        assert_eq!(params.id, "ord-42");
    }

    #[test]
    fn test_schema_marks_id_required() {
        let schema = serde_json::to_value(cached_schema_for_type::<GetOrderParams>()).unwrap();
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&Value::String("id".to_string())));
    }
}
