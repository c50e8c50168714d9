//! Order listing tool.
//!
//! Lists orders from the venue with optional status, order-type, and
//! date-range filters. Pagination is left to the API's own defaults when
//! no page parameters are supplied.

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

/// Order lifecycle states accepted as a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Open,
    Closed,
    Voided,
    Refunded,
}

/// Order channel types accepted as a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    DineIn,
    Takeout,
    Delivery,
    Bar,
}

/// Parameters for listing orders.
///
/// Field order is the order query parameters are emitted in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListOrdersParams {
    /// Page number for pagination.
    #[schemars(description = "Page number for pagination (default: 1)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Number of results per page.
    #[schemars(description = "Number of results per page (default: 25, max: 100)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Filter by order status.
    #[schemars(description = "Filter by order status")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    /// Filter by order type.
    #[schemars(description = "Filter by order type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,

    /// Start of the order date range.
    #[schemars(description = "Filter by order date (start) in YYYY-MM-DD format")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// End of the order date range.
    #[schemars(description = "Filter by order date (end) in YYYY-MM-DD format")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Order listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListOrdersTool;

impl ListOrdersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_orders";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List orders from TouchBistro POS. Filter by status, order type, and date range.";

    /// Parse raw MCP arguments and run the tool.
    pub async fn dispatch(arguments: Value, client: &TouchBistroClient) -> CallToolResult {
        match parse_params::<ListOrdersParams>(Self::NAME, arguments) {
            Ok(params) => Self::execute(&params, client).await,
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Execute the tool logic.
    pub async fn execute(params: &ListOrdersParams, client: &TouchBistroClient) -> CallToolResult {
        info!("Listing orders");
        pos_result(client.list_orders(params).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListOrdersParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
