//! Reservation tools: listing and creation.

mod create;
mod list;

pub use create::{CreateReservationParams, CreateReservationTool, ReservationSource};
pub use list::{ListReservationsParams, ListReservationsTool, ReservationStatus};
