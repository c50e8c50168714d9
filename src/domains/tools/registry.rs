//! Tool Registry - the ordered catalog and the single dispatch point.
//!
//! Every incoming call routes through [`ToolRegistry::dispatch`]: name
//! lookup, parameter deserialization, gateway call, and conversion of every
//! failure into an error-flagged result. An unknown name never reaches the
//! network.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;
use tracing::warn;

use crate::domains::pos::TouchBistroClient;

use super::definitions::common::error_result;
use super::definitions::{
    CreateReservationTool, GetOrderTool, GetSalesReportTool, ListMenuItemsTool,
    ListOrdersTool, ListReservationsTool, ListStaffTool,
};
use super::error::ToolError;

/// Tool registry - manages the fixed tool catalog.
pub struct ToolRegistry {
    client: Arc<TouchBistroClient>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by the given gateway client.
    pub fn new(client: Arc<TouchBistroClient>) -> Self {
        Self { client }
    }

    /// Get all tool names, in catalog order.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            ListOrdersTool::NAME,
            GetOrderTool::NAME,
            ListMenuItemsTool::NAME,
            ListReservationsTool::NAME,
            CreateReservationTool::NAME,
            ListStaffTool::NAME,
            GetSalesReportTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the catalog: same descriptors,
    /// same order, on every call.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ListOrdersTool::to_tool(),
            GetOrderTool::to_tool(),
            ListMenuItemsTool::to_tool(),
            ListReservationsTool::to_tool(),
            CreateReservationTool::to_tool(),
            ListStaffTool::to_tool(),
            GetSalesReportTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the matching implementation.
    pub async fn dispatch(&self, name: &str, arguments: Value) -> CallToolResult {
        match name {
            ListOrdersTool::NAME => ListOrdersTool::dispatch(arguments, &self.client).await,
            GetOrderTool::NAME => GetOrderTool::dispatch(arguments, &self.client).await,
            ListMenuItemsTool::NAME => ListMenuItemsTool::dispatch(arguments, &self.client).await,
            ListReservationsTool::NAME => {
                ListReservationsTool::dispatch(arguments, &self.client).await
            }
            CreateReservationTool::NAME => {
                CreateReservationTool::dispatch(arguments, &self.client).await
            }
            ListStaffTool::NAME => ListStaffTool::dispatch(arguments, &self.client).await,
            GetSalesReportTool::NAME => GetSalesReportTool::dispatch(arguments, &self.client).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                error_result(&ToolError::unknown(name).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PosConfig;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn test_registry() -> ToolRegistry {
        // Port 1 is never listening; any dispatch that reached the network
        // would fail with a transport error rather than hang.
        ToolRegistry::new(Arc::new(TouchBistroClient::new(&PosConfig {
            api_key: "test-key".to_string(),
            venue_id: "venue-1".to_string(),
            base_url: "http://127.0.0.1:1".to_string(),
        })))
    }

    fn result_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_catalog_has_seven_tools() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 7);
        assert_eq!(
            names,
            vec![
                "list_orders",
                "get_order",
                "list_menu_items",
                "list_reservations",
                "create_reservation",
                "list_staff",
                "get_sales_report",
            ]
        );
    }

    #[test]
    fn test_catalog_is_stable_across_calls() {
        let first = ToolRegistry::get_all_tools();
        let second = ToolRegistry::get_all_tools();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.description, b.description);
            assert_eq!(a.input_schema, b.input_schema);
        }
    }

    #[test]
    fn test_catalog_matches_names() {
        let tools = ToolRegistry::get_all_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, ToolRegistry::tool_names());
    }

    #[test]
    fn test_schemas_carry_enum_and_required_lists() {
        let tools = ToolRegistry::get_all_tools();

        let orders = tools.iter().find(|t| t.name == "list_orders").unwrap();
        let schema = serde_json::to_string(&orders.input_schema).unwrap();
        for value in ["open", "closed", "voided", "refunded", "dine_in", "takeout"] {
            assert!(schema.contains(value), "missing enum value {}", value);
        }

        let create = tools.iter().find(|t| t.name == "create_reservation").unwrap();
        let schema = serde_json::to_value(&create.input_schema).unwrap();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 4);
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool_is_flagged_with_name() {
        let registry = test_registry();
        let result = registry.dispatch("list_widgets", json!({})).await;
        assert_eq!(result.is_error, Some(true));
        let text = result_text(&result);
        assert!(text.starts_with("Error: "));
        assert!(text.contains("list_widgets"));
    }

    #[tokio::test]
    async fn test_dispatch_invalid_arguments_is_flagged() {
        let registry = test_registry();
        let result = registry.dispatch("get_order", json!({})).await;
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("get_order"));
    }

    #[tokio::test]
    async fn test_dispatch_network_failure_is_flagged_not_thrown() {
        let registry = test_registry();
        let result = registry.dispatch("list_orders", json!({})).await;
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).starts_with("Error: "));
    }
}
