//! Staff tools.

mod list;

pub use list::{ListStaffParams, ListStaffTool, StaffRole};
