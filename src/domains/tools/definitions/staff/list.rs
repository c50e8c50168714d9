//! Staff listing tool.

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

/// Staff roles accepted as a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Server,
    Bartender,
    Host,
    Manager,
    Kitchen,
    Cashier,
}

/// Parameters for listing staff members.
///
/// Field order is the order query parameters are emitted in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListStaffParams {
    /// Page number for pagination.
    #[schemars(description = "Page number for pagination")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Number of results per page.
    #[schemars(description = "Number of results per page (max: 100)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Filter by staff role.
    #[schemars(description = "Filter by staff role")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<StaffRole>,

    /// Filter by employment status.
    #[schemars(description = "Filter by active employment status")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Staff listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListStaffTool;

impl ListStaffTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_staff";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List staff members from TouchBistro";

    /// Parse raw MCP arguments and run the tool.
    pub async fn dispatch(arguments: Value, client: &TouchBistroClient) -> CallToolResult {
        match parse_params::<ListStaffParams>(Self::NAME, arguments) {
            Ok(params) => Self::execute(&params, client).await,
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Execute the tool logic.
    pub async fn execute(params: &ListStaffParams, client: &TouchBistroClient) -> CallToolResult {
        info!("Listing staff");
        pos_result(client.list_staff(params).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListStaffParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
