//! TouchBistro POS gateway domain.
//!
//! This module owns the single outbound HTTP call each tool invocation makes:
//! URL composition, authentication headers, and normalization of the HTTP
//! outcome into a JSON value or a [`PosError`].

mod client;
mod error;

pub use client::TouchBistroClient;
pub use error::PosError;
