//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the tool catalog and dispatch layer exposed over MCP
//! - **pos**: the authenticated HTTP gateway to the TouchBistro cloud API

pub mod pos;
pub mod tools;
