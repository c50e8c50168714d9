//! Reservation listing tool.

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

/// Reservation lifecycle states accepted as a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Seated,
    Completed,
    Cancelled,
    NoShow,
}

/// Parameters for listing reservations.
///
/// Field order is the order query parameters are emitted in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListReservationsParams {
    /// Page number for pagination.
    #[schemars(description = "Page number for pagination")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Number of results per page.
    #[schemars(description = "Number of results per page (max: 100)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Filter by reservation date.
    #[schemars(description = "Filter by reservation date in YYYY-MM-DD format")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Filter by reservation status.
    #[schemars(description = "Filter by reservation status")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,

    /// Filter by party size.
    #[schemars(description = "Filter by party size")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_size: Option<u32>,
}

/// Reservation listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListReservationsTool;

impl ListReservationsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_reservations";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List reservations from TouchBistro";

    /// Parse raw MCP arguments and run the tool.
    pub async fn dispatch(arguments: Value, client: &TouchBistroClient) -> CallToolResult {
        match parse_params::<ListReservationsParams>(Self::NAME, arguments) {
            Ok(params) => Self::execute(&params, client).await,
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Execute the tool logic.
    pub async fn execute(
        params: &ListReservationsParams,
        client: &TouchBistroClient,
    ) -> CallToolResult {
        info!("Listing reservations");
        pos_result(client.list_reservations(params).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListReservationsParams>(),
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
    fn test_no_show_wire_name() {
        let params: ListReservationsParams =
            serde_json::from_str(r#"{"status": "no_show"}"#).unwrap();
        assert_eq!(params.status, Some(ReservationStatus::NoShow));
    }

    #[test]
    fn test_query_with_all_filters() {
        let params = ListReservationsParams {
            page: Some(1),
            page_size: Some(10),
            date: Some("2024-06-01".to_string()),
            status: Some(ReservationStatus::Confirmed),
            party_size: Some(4),
        };
        let query = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(
            query,
            "page=1&pageSize=10&date=2024-06-01&status=confirmed&partySize=4"
        );
    }
}
