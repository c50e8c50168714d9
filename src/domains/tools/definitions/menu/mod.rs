//! Menu tools.

mod items;

pub use items::{ListMenuItemsParams, ListMenuItemsTool};
