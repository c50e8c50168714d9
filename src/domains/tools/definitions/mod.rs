//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file, grouped by POS domain.

pub mod common;
pub mod menu;
pub mod orders;
pub mod reports;
pub mod reservations;
pub mod staff;

pub use menu::{ListMenuItemsParams, ListMenuItemsTool};
pub use orders::{
    GetOrderParams, GetOrderTool, ListOrdersParams, ListOrdersTool, OrderStatus, OrderType,
};
pub use reports::{GetSalesReportParams, GetSalesReportTool, ReportGroupBy};
pub use reservations::{
    CreateReservationParams, CreateReservationTool, ListReservationsParams, ListReservationsTool,
    ReservationSource, ReservationStatus,
};
pub use staff::{ListStaffParams, ListStaffTool, StaffRole};
