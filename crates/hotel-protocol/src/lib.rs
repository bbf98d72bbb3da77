//! Shared vocabulary for the hotel desk.
//!
//! This crate defines the "language" the dispatcher and the booking layer
//! speak:
//!
//! - **Types** ([`RoomId`]) — identities that travel between layers.
//! - **Commands** ([`MenuChoice`], [`Command`]) — what an operator can ask for.
//! - **Parsing** ([`parse_room_number`], [`parse_guest_name`]) — turning raw
//!   input lines into typed values.
//! - **Errors** ([`ProtocolError`]) — what can go wrong while parsing.
//!
//! # Architecture
//!
//! The protocol layer sits between the terminal (raw lines) and the booking
//! service (rooms, queue, history). It knows nothing about rooms being free
//! or occupied; it only knows how to read a request.
//!
//! ```text
//! Console (lines) → Protocol (Command) → Booking (outcome)
//! ```

mod command;
mod error;
mod types;

pub use command::{parse_guest_name, parse_room_number, Command, MenuChoice};
pub use error::ProtocolError;
pub use types::RoomId;
