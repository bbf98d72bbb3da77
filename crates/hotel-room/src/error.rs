//! Error types for the room layer.

/// Errors that can occur while building the room collection.
///
/// Lookups never fail: a missing room is `None`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomError {
    /// The configuration asks for a hotel with no rooms.
    #[error("hotel must have at least one room")]
    NoRooms,

    /// Numbering `count` rooms from `first` runs past the largest room id.
    #[error("cannot number {count} rooms starting at {first}")]
    IdOverflow { first: i64, count: usize },
}
