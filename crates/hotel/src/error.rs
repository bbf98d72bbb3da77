//! Unified error type for the hotel desk.

use hotel_protocol::ProtocolError;
use hotel_room::RoomError;

/// Top-level error that wraps every crate-specific error.
///
/// Booking conditions (full hotel, unknown room, room already free) are not
/// errors; they come back as outcomes. This type covers unreadable input,
/// unbuildable configuration, and a broken terminal.
#[derive(Debug, thiserror::Error)]
pub enum HotelError {
    /// The operator typed something that could not be read.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The hotel configuration could not be turned into rooms.
    #[error(transparent)]
    Room(#[from] RoomError),

    /// Reading from or writing to the terminal failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
