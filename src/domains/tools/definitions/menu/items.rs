//! Menu item listing tool.

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

/// Parameters for listing menu items.
///
/// Field order is the order query parameters are emitted in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListMenuItemsParams {
    /// Page number for pagination.
    #[schemars(description = "Page number for pagination")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Number of results per page.
    #[schemars(description = "Number of results per page (max: 100)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Filter by menu category.
    #[schemars(description = "Filter by menu category ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    /// Filter by active status.
    #[schemars(description = "Filter by active status (true = available for ordering)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Menu item listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListMenuItemsTool;

impl ListMenuItemsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_menu_items";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List menu items from TouchBistro. Get all items available for ordering.";

    /// Parse raw MCP arguments and run the tool.
    pub async fn dispatch(arguments: Value, client: &TouchBistroClient) -> CallToolResult {
        match parse_params::<ListMenuItemsParams>(Self::NAME, arguments) {
            Ok(params) => Self::execute(&params, client).await,
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Execute the tool logic.
    pub async fn execute(
        params: &ListMenuItemsParams,
        client: &TouchBistroClient,
    ) -> CallToolResult {
        info!("Listing menu items");
        pos_result(client.list_menu_items(params).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListMenuItemsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
