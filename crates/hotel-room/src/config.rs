//! Hotel configuration.

use hotel_protocol::RoomId;
use serde::{Deserialize, Serialize};

use crate::RoomError;

/// How the hotel's rooms are built at startup.
///
/// The default is the ten-room hotel numbered 1 through 10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelConfig {
    /// Number of rooms to create.
    pub room_count: usize,

    /// Number of the first room; the rest follow consecutively.
    pub first_room_id: i64,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            room_count: 10,
            first_room_id: 1,
        }
    }
}

impl HotelConfig {
    /// Shorthand for `room_count` rooms numbered from 1.
    pub fn with_rooms(room_count: usize) -> Self {
        Self {
            room_count,
            ..Self::default()
        }
    }

    /// Checks that the configuration describes a buildable hotel.
    ///
    /// # Errors
    /// - [`RoomError::NoRooms`] — `room_count` is zero
    /// - [`RoomError::IdOverflow`] — the last room number doesn't fit in `i64`
    pub fn validate(&self) -> Result<(), RoomError> {
        self.last_room_id().map(|_| ())
    }

    /// Room numbers in creation order.
    ///
    /// # Errors
    /// Same as [`validate`](Self::validate).
    pub fn room_ids(&self) -> Result<impl Iterator<Item = RoomId>, RoomError> {
        let last = self.last_room_id()?;
        Ok((self.first_room_id..=last).map(RoomId))
    }

    fn last_room_id(&self) -> Result<i64, RoomError> {
        if self.room_count == 0 {
            return Err(RoomError::NoRooms);
        }
        let overflow = RoomError::IdOverflow {
            first: self.first_room_id,
            count: self.room_count,
        };
        let span = i64::try_from(self.room_count - 1).map_err(|_| overflow.clone())?;
        self.first_room_id.checked_add(span).ok_or(overflow)
    }
}
