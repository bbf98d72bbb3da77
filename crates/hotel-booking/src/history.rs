//! Check-in history.

use std::fmt;

use hotel_protocol::RoomId;
use serde::{Deserialize, Serialize};

/// One booking: which room went to which guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub room: RoomId,
    pub guest: String,
}

impl BookingRecord {
    pub fn new(room: RoomId, guest: impl Into<String>) -> Self {
        Self {
            room,
            guest: guest.into(),
        }
    }
}

impl fmt::Display for BookingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room {} was booked by {}.", self.room, self.guest)
    }
}

/// Bookings as a stack: the latest one comes out first.
///
/// Reading the history through [`drain`](Self::drain) consumes it. Asking a
/// second time right after yields nothing, even though the bookings
/// happened. [`peek`](Self::peek) is the non-destructive view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    // Oldest at index 0; the top of the stack is the end of the vec.
    records: Vec<BookingRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, room: RoomId, guest: impl Into<String>) {
        self.records.push(BookingRecord::new(room, guest));
    }

    /// Removes every record, most recent first. The log is empty afterwards.
    pub fn drain(&mut self) -> Vec<BookingRecord> {
        let mut records = std::mem::take(&mut self.records);
        records.reverse();
        records
    }

    /// Records, most recent first, without removing them.
    pub fn peek(&self) -> impl Iterator<Item = &BookingRecord> {
        self.records.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_is_lifo_and_empties() {
        let mut log = HistoryLog::new();
        log.push(RoomId(1), "Ada");
        log.push(RoomId(2), "Bob");

        let drained = log.drain();
        assert_eq!(
            drained,
            vec![
                BookingRecord::new(RoomId(2), "Bob"),
                BookingRecord::new(RoomId(1), "Ada"),
            ]
        );
        assert!(log.is_empty());
        assert!(log.drain().is_empty());
    }

    #[test]
    fn test_peek_leaves_records() {
        let mut log = HistoryLog::new();
        log.push(RoomId(1), "Ada");
        log.push(RoomId(2), "Bob");

        let rooms: Vec<_> = log.peek().map(|r| r.room).collect();
        assert_eq!(rooms, vec![RoomId(2), RoomId(1)]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_record_display() {
        let record = BookingRecord::new(RoomId(3), "Cy");
        assert_eq!(record.to_string(), "Room 3 was booked by Cy.");
    }
}
