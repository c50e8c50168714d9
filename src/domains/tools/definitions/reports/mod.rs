//! Reporting tools.

mod sales;

pub use sales::{GetSalesReportParams, GetSalesReportTool, ReportGroupBy};
