//! TouchBistro MCP Server Library
//!
//! This crate exposes the TouchBistro cloud POS API as a set of MCP
//! (Model Context Protocol) tools served over stdio.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The tool catalog and dispatch layer
//!   - **pos**: The authenticated HTTP gateway to the TouchBistro API
//!
//! # Example
//!
//! ```rust,no_run
//! use touchbistro_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
