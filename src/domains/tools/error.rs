//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur at the dispatch boundary.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool name is not in the catalog.
    #[error("Unknown tool: {0}")]
    Unknown(String),

    /// The arguments did not deserialize into the tool's parameter struct.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::Unknown(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
