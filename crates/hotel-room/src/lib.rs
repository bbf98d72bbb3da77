//! Room storage for the hotel desk.
//!
//! The hotel's rooms are created once at startup and live for the whole
//! session. This crate owns them and answers the two questions the booking
//! layer keeps asking: "which room is free?" and "where is room N?".
//!
//! # Key types
//!
//! - [`Room`] — one bookable unit and its current occupant
//! - [`RoomState`] — Available / Occupied
//! - [`RoomCollection`] — the ordered set of rooms, with lookups
//! - [`HotelConfig`] — how many rooms to build and how to number them
//! - [`RoomError`] — configuration failures

mod collection;
mod config;
mod error;
mod room;

pub use collection::RoomCollection;
pub use config::HotelConfig;
pub use error::RoomError;
pub use room::{Room, RoomState};
