//! A single room and its two-state lifecycle.

use std::fmt;

use hotel_protocol::RoomId;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RoomState
// ---------------------------------------------------------------------------

/// Whether a room can take a guest.
///
/// ```text
///            occupy(guest)
/// Available ──────────────→ Occupied
///     ↑                        │
///     └──────── vacate() ──────┘
/// ```
///
/// There is no terminal state; rooms cycle for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomState {
    Available,
    Occupied,
}

impl RoomState {
    /// Returns `true` if a guest can be placed in the room.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for RoomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Occupied => write!(f, "Occupied"),
        }
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// One bookable room.
///
/// The occupant is the single source of truth: a room is available exactly
/// when nobody is in it, so availability can't drift out of sync with the
/// guest name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    occupant: Option<String>,
}

impl Room {
    /// Creates an empty, available room.
    pub fn new(id: RoomId) -> Self {
        Self { id, occupant: None }
    }

    /// The room's number. Fixed for the room's lifetime.
    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn state(&self) -> RoomState {
        if self.occupant.is_some() {
            RoomState::Occupied
        } else {
            RoomState::Available
        }
    }

    pub fn is_available(&self) -> bool {
        self.state().is_available()
    }

    /// The guest currently in the room, if any.
    pub fn occupant(&self) -> Option<&str> {
        self.occupant.as_deref()
    }

    /// Puts `guest` in the room, replacing whoever was there.
    ///
    /// Callers check availability first; the room itself does not refuse.
    pub fn occupy(&mut self, guest: impl Into<String>) {
        self.occupant = Some(guest.into());
    }

    /// Empties the room and returns the departing guest.
    pub fn vacate(&mut self) -> Option<String> {
        self.occupant.take()
    }
}
