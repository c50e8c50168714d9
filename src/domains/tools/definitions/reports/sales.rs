//! Sales report tool.

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

/// Report aggregation dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportGroupBy {
    Day,
    Week,
    Month,
    Category,
    Item,
    Server,
}

/// Parameters for fetching a sales report.
///
/// Field order is the order query parameters are emitted in. The date range
/// is required; grouping and void/refund inclusion are optional.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetSalesReportParams {
    /// Report range start.
    #[schemars(description = "Report start date in YYYY-MM-DD format (required)")]
    pub start_date: String,

    /// Report range end.
    #[schemars(description = "Report end date in YYYY-MM-DD format (required)")]
    pub end_date: String,

    /// How to group the report data.
    #[schemars(description = "How to group the report data")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<ReportGroupBy>,

    /// Include voided orders.
    #[schemars(description = "Include voided orders in the report")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_voids: Option<bool>,

    /// Include refunded orders.
    #[schemars(description = "Include refunded orders in the report")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_refunds: Option<bool>,
}

/// Sales report tool implementation.
#[derive(Debug, Clone)]
pub struct GetSalesReportTool;

impl GetSalesReportTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_sales_report";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get sales report data from TouchBistro for analysis and reporting";

    /// Parse raw MCP arguments and run the tool.
    pub async fn dispatch(arguments: Value, client: &TouchBistroClient) -> CallToolResult {
        match parse_params::<GetSalesReportParams>(Self::NAME, arguments) {
            Ok(params) => Self::execute(&params, client).await,
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Execute the tool logic.
    pub async fn execute(
        params: &GetSalesReportParams,
        client: &TouchBistroClient,
    ) -> CallToolResult {
        info!(
            "Fetching sales report {} to {}",
            params.start_date, params.end_date
        );
        pos_result(client.get_sales_report(params).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetSalesReportParams>(),
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
    fn test_date_range_required() {
        assert!(serde_json::from_str::<GetSalesReportParams>("{}").is_err());
        assert!(
            serde_json::from_str::<GetSalesReportParams>(r#"{"startDate": "2024-01-01"}"#).is_err()
        );
    }

    #[test]
    fn test_minimal_query() {
        let params: GetSalesReportParams = serde_json::from_str(
            r#"{"startDate": "2024-01-01", "endDate": "2024-01-31"}"#,
        )
        .unwrap();
        let query = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(query, "startDate=2024-01-01&endDate=2024-01-31");
    }

    #[test]
    fn test_full_query() {
        let params = GetSalesReportParams {
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-31".to_string(),
            group_by: Some(ReportGroupBy::Category),
            include_voids: Some(true),
            include_refunds: Some(false),
        };
        let query = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(
            query,
            "startDate=2024-01-01&endDate=2024-01-31&groupBy=category&includeVoids=true&includeRefunds=false"
        );
    }
}
