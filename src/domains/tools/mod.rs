//! Tools domain module.
//!
//! This module handles the tool catalog and dispatch for the MCP server.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Ordered catalog and the single dispatch point
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `execute()`, `dispatch()`,
//!    and `to_tool()`
//! 2. Export in `definitions/mod.rs`
//! 3. Register in `registry.rs` (catalog list and dispatch match)

pub mod definitions;
mod error;
mod registry;

pub use error::ToolError;
pub use registry::ToolRegistry;
