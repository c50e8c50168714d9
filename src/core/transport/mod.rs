//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output, the default transport
//! for agent-hosted servers. The transport handles the connection lifecycle
//! and delegates message processing to the MCP server handler.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
