//! Identity types shared by every layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The number painted on a room door.
///
/// Newtype wrapper so a room number can't be mixed up with a count or a
/// queue position. Signed because the dispatcher forwards whatever integer
/// the operator types; a negative number is just a room that doesn't exist.
///
/// `#[serde(transparent)]` serializes `RoomId(7)` as plain `7`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomId(pub i64);

/// Displayed as the bare number: every operator-facing line reads
/// `Room 3 ...`.
impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RoomId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_display_is_bare_number() {
        assert_eq!(RoomId(42).to_string(), "42");
        assert_eq!(RoomId(-1).to_string(), "-1");
    }

    #[test]
    fn test_room_id_serializes_transparently() {
        let json = serde_json::to_string(&RoomId(7)).unwrap();
        assert_eq!(json, "7");
        let back: RoomId = serde_json::from_str("7").unwrap();
        assert_eq!(back, RoomId(7));
    }

    #[test]
    fn test_room_id_orders_numerically() {
        assert!(RoomId(2) < RoomId(10));
    }
}
