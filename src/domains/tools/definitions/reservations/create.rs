//! Reservation creation tool.
//!
//! The one write operation in the catalog. The full parameter struct is
//! serialized as the POST body; unset optional fields are absent from the
//! object, never sent as null.

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

/// Where a reservation originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReservationSource {
    Phone,
    WalkIn,
    Online,
    ThirdParty,
}

/// Parameters for creating a reservation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationParams {
    /// Customer name.
    #[schemars(description = "Customer name (required)")]
    pub customer_name: String,

    /// Customer phone number.
    #[schemars(description = "Customer phone number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,

    /// Customer email address.
    #[schemars(description = "Customer email address")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    /// Number of guests.
    #[schemars(description = "Number of guests (required)")]
    pub party_size: u32,

    /// Reservation date.
    #[schemars(description = "Reservation date in YYYY-MM-DD format (required)")]
    pub date: String,

    /// Reservation time.
    #[schemars(description = "Reservation time in HH:MM format (required)")]
    pub time: String,

    /// Specific table to reserve.
    #[schemars(description = "Specific table ID to reserve")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,

    /// Special requests or notes.
    #[schemars(description = "Special requests or notes")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Reservation source.
    #[schemars(description = "Reservation source")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ReservationSource>,
}

/// Reservation creation tool implementation.
#[derive(Debug, Clone)]
pub struct CreateReservationTool;

impl CreateReservationTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_reservation";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new reservation in TouchBistro";

    /// Parse raw MCP arguments and run the tool.
    ///
    /// Missing required fields are rejected here, before any network call.
    pub async fn dispatch(arguments: Value, client: &TouchBistroClient) -> CallToolResult {
        match parse_params::<CreateReservationParams>(Self::NAME, arguments) {
            Ok(params) => Self::execute(&params, client).await,
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Execute the tool logic.
    pub async fn execute(
        params: &CreateReservationParams,
        client: &TouchBistroClient,
    ) -> CallToolResult {
        info!(
            "Creating reservation for {} (party of {})",
            params.customer_name, params.party_size
        );
        pos_result(client.create_reservation(params).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateReservationParams>(),
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
    use serde_json::json;

    #[test]
    fn test_required_fields_enforced() {
        // Missing partySize, date, time
        let result = serde_json::from_value::<CreateReservationParams>(json!({
            "customerName": "Jane Doe"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_body_has_no_injected_fields() {
        let params: CreateReservationParams = serde_json::from_value(json!({
            "customerName": "Jane Doe",
            "partySize": 4,
            "date": "2024-06-01",
            "time": "19:00"
        }))
        .unwrap();

        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            json!({
                "customerName": "Jane Doe",
                "partySize": 4,
                "date": "2024-06-01",
                "time": "19:00"
            })
        );
    }

    #[test]
    fn test_optional_fields_serialize_when_present() {
        let params: CreateReservationParams = serde_json::from_value(json!({
            "customerName": "Jane Doe",
            "customerPhone": "555-0100",
            "partySize": 2,
            "date": "2024-06-01",
            "time": "18:30",
            "source": "walk_in"
        }))
        .unwrap();

        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["customerPhone"], "555-0100");
        assert_eq!(body["source"], "walk_in");
        assert!(body.get("tableId").is_none());
        assert!(body.get("notes").is_none());
    }

    #[test]
    fn test_schema_required_list() {
        let schema =
            serde_json::to_value(cached_schema_for_type::<CreateReservationParams>()).unwrap();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(required.contains(&"customerName"));
        assert!(required.contains(&"partySize"));
        assert!(required.contains(&"date"));
        assert!(required.contains(&"time"));
        assert!(!required.contains(&"notes"));
    }
}
