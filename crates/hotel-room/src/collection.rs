//! The ordered set of rooms the hotel owns.

use hotel_protocol::RoomId;
use serde::{Deserialize, Serialize};

use crate::{HotelConfig, Room, RoomError};

/// Every room in the hotel, in the order they were added.
///
/// Order matters twice: [`find_available_room`](Self::find_available_room)
/// hands out the earliest free room, and
/// [`list_available`](Self::list_available) reports rooms in insertion order.
///
/// Ids are not checked for uniqueness. If the same id is added twice both
/// rooms exist, and lookups by id always land on the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCollection {
    rooms: Vec<Room>,
}

impl RoomCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the rooms described by `config`, in id order.
    ///
    /// # Errors
    /// Returns the config's validation error; see [`HotelConfig::validate`].
    pub fn from_config(config: &HotelConfig) -> Result<Self, RoomError> {
        let mut rooms = Self::new();
        for id in config.room_ids()? {
            rooms.add_room(id);
        }
        tracing::debug!(count = rooms.len(), "room collection built");
        Ok(rooms)
    }

    /// Appends a new, empty room.
    pub fn add_room(&mut self, id: RoomId) {
        self.rooms.push(Room::new(id));
    }

    /// The first free room, in collection order.
    pub fn find_available_room(&self) -> Option<&Room> {
        self.rooms.iter().find(|room| room.is_available())
    }

    pub fn find_available_room_mut(&mut self) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.is_available())
    }

    /// The first room numbered `id`.
    pub fn find_room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id() == id)
    }

    pub fn find_room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.id() == id)
    }

    /// All free rooms, in collection order.
    pub fn list_available(&self) -> Vec<&Room> {
        self.rooms.iter().filter(|room| room.is_available()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.rooms.iter()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl<'a> IntoIterator for &'a RoomCollection {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(rooms: &[&Room]) -> Vec<i64> {
        rooms.iter().map(|r| r.id().0).collect()
    }

    #[test]
    fn test_empty_collection_has_no_free_room() {
        let rooms = RoomCollection::new();
        assert!(rooms.is_empty());
        assert!(rooms.find_available_room().is_none());
        assert!(rooms.list_available().is_empty());
    }

    #[test]
    fn test_find_available_skips_occupied() {
        let mut rooms = RoomCollection::new();
        for id in 1..=3 {
            rooms.add_room(RoomId(id));
        }
        rooms.find_room_mut(RoomId(1)).unwrap().occupy("Ada");

        assert_eq!(rooms.find_available_room().unwrap().id(), RoomId(2));
        assert_eq!(ids(&rooms.list_available()), vec![2, 3]);
    }

    #[test]
    fn test_lookup_does_not_mutate() {
        let rooms = RoomCollection::from_config(&HotelConfig::with_rooms(2)).unwrap();
        let before = rooms.clone();
        let _ = rooms.find_available_room();
        let _ = rooms.find_room(RoomId(2));
        assert_eq!(rooms, before);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let mut rooms = RoomCollection::new();
        rooms.add_room(RoomId(5));
        rooms.add_room(RoomId(5));
        assert_eq!(rooms.len(), 2);

        rooms.find_room_mut(RoomId(5)).unwrap().occupy("Ada");
        // The second room 5 is still free, but lookup by id never reaches it.
        assert_eq!(rooms.find_room(RoomId(5)).unwrap().occupant(), Some("Ada"));
        assert_eq!(rooms.list_available().len(), 1);
    }

    #[test]
    fn test_missing_room_is_none() {
        let rooms = RoomCollection::from_config(&HotelConfig::with_rooms(3)).unwrap();
        assert!(rooms.find_room(RoomId(4)).is_none());
        assert!(rooms.find_room(RoomId(-1)).is_none());
    }

    #[test]
    fn test_from_config_propagates_error() {
        let err = RoomCollection::from_config(&HotelConfig::with_rooms(0)).unwrap_err();
        assert_eq!(err, RoomError::NoRooms);
    }
}
