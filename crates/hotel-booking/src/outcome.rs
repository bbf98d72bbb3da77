//! What each desk operation reports back.
//!
//! The `Display` impls produce the exact lines shown to the operator, so a
//! front end only has to print the outcome.

use std::fmt;

use hotel_protocol::RoomId;
use serde::{Deserialize, Serialize};

use crate::BookingRecord;

/// Result of asking for a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookOutcome {
    /// The guest got a room.
    Booked { room: RoomId, guest: String },
    /// Every room is taken; the guest joined the waiting list at `position`
    /// (1 = next in line).
    Waitlisted { guest: String, position: usize },
}

impl fmt::Display for BookOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Booked { room, guest } => {
                write!(f, "Room {room} booked successfully for {guest}.")
            }
            Self::Waitlisted { guest, .. } => {
                write!(f, "No rooms available. Adding {guest} to the waiting list.")
            }
        }
    }
}

/// Result of checking a room out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutOutcome {
    /// No room has that number. Nothing changed.
    NotFound(RoomId),
    /// The room was already empty. Nothing changed.
    AlreadyFree(RoomId),
    /// `guest` left. If `next` is set, that guest came off the waiting list
    /// and now holds the room; otherwise the room is free.
    CheckedOut {
        room: RoomId,
        guest: String,
        next: Option<String>,
    },
}

impl fmt::Display for CheckoutOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(room) => write!(f, "Room {room} does not exist."),
            Self::AlreadyFree(room) => write!(f, "Room {room} is already free."),
            Self::CheckedOut { room, guest, next } => {
                writeln!(f, "Room {room} checked out by {guest}.")?;
                match next {
                    Some(next) => write!(
                        f,
                        "Room {room} is now booked for {next} from the waiting list."
                    ),
                    None => write!(f, "Room {room} is now available."),
                }
            }
        }
    }
}

/// The check-in history as it was when reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryReport {
    Empty,
    /// Most recent booking first.
    Entries(Vec<BookingRecord>),
}

impl HistoryReport {
    pub fn records(&self) -> &[BookingRecord] {
        match self {
            Self::Empty => &[],
            Self::Entries(records) => records,
        }
    }
}

impl From<Vec<BookingRecord>> for HistoryReport {
    fn from(records: Vec<BookingRecord>) -> Self {
        if records.is_empty() {
            Self::Empty
        } else {
            Self::Entries(records)
        }
    }
}

impl fmt::Display for HistoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No check-in history available."),
            Self::Entries(records) => {
                write!(f, "Check-in History:")?;
                for record in records {
                    write!(f, "\n{record}")?;
                }
                Ok(())
            }
        }
    }
}
