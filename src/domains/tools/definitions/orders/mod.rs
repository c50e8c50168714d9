//! Order tools: listing with filters and single-order lookup.

mod get;
mod list;

pub use get::{GetOrderParams, GetOrderTool};
pub use list::{ListOrdersParams, ListOrdersTool, OrderStatus, OrderType};
