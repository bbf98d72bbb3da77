//! Integration tests for the room layer: building the hotel and walking
//! rooms through their lifecycle.

use hotel_protocol::RoomId;
use hotel_room::{HotelConfig, RoomCollection, RoomError, RoomState};

// =========================================================================
// Helpers
// =========================================================================

fn hotel(count: usize) -> RoomCollection {
    RoomCollection::from_config(&HotelConfig::with_rooms(count)).unwrap()
}

fn available_ids(rooms: &RoomCollection) -> Vec<RoomId> {
    rooms.list_available().iter().map(|r| r.id()).collect()
}

// =========================================================================
// Construction
// =========================================================================

#[test]
fn test_default_hotel_lists_all_rooms_in_order() {
    let rooms = RoomCollection::from_config(&HotelConfig::default()).unwrap();
    assert_eq!(rooms.len(), 10);
    assert_eq!(available_ids(&rooms), (1..=10).map(RoomId).collect::<Vec<_>>());
}

#[test]
fn test_insertion_order_is_kept_even_when_ids_are_not_sorted() {
    let mut rooms = RoomCollection::new();
    for id in [30, 10, 20] {
        rooms.add_room(RoomId(id));
    }
    assert_eq!(available_ids(&rooms), vec![RoomId(30), RoomId(10), RoomId(20)]);
    assert_eq!(rooms.find_available_room().unwrap().id(), RoomId(30));
}

#[test]
fn test_invalid_config_builds_nothing() {
    assert_eq!(
        RoomCollection::from_config(&HotelConfig::with_rooms(0)),
        Err(RoomError::NoRooms)
    );
}

// =========================================================================
// Lifecycle
// =========================================================================

#[test]
fn test_occupied_room_is_never_offered_until_vacated() {
    let mut rooms = hotel(3);

    let first = rooms.find_available_room_mut().unwrap();
    assert_eq!(first.id(), RoomId(1));
    first.occupy("Ada");

    assert_eq!(rooms.find_available_room().unwrap().id(), RoomId(2));
    assert_eq!(available_ids(&rooms), vec![RoomId(2), RoomId(3)]);

    let departed = rooms.find_room_mut(RoomId(1)).unwrap().vacate();
    assert_eq!(departed.as_deref(), Some("Ada"));
    assert_eq!(rooms.find_available_room().unwrap().id(), RoomId(1));
}

#[test]
fn test_full_hotel_has_no_available_room() {
    let mut rooms = hotel(2);
    while let Some(room) = rooms.find_available_room_mut() {
        room.occupy("guest");
    }
    assert!(rooms.find_available_room().is_none());
    assert!(rooms.list_available().is_empty());
    assert!(rooms.iter().all(|r| r.state() == RoomState::Occupied));
}

#[test]
fn test_collection_serializes_as_room_list() {
    let mut rooms = hotel(2);
    rooms.find_room_mut(RoomId(2)).unwrap().occupy("Bob");
    let json = serde_json::to_value(&rooms).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "id": 1, "occupant": null },
            { "id": 2, "occupant": "Bob" },
        ])
    );
}
