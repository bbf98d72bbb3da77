//! The booking service: the one object that owns the hotel's state.

use hotel_protocol::RoomId;
use hotel_room::{HotelConfig, Room, RoomCollection, RoomError};
use serde::{Deserialize, Serialize};

use crate::{BookOutcome, CheckoutOutcome, HistoryLog, HistoryReport, WaitingQueue};

/// Orchestrates rooms, the waiting list, and the history.
///
/// ## Flow
///
/// ```text
/// book_room(guest) ──→ free room? ──yes──→ occupy + history
///                          │
///                          no ──→ waiting list
///
/// checkout_room(id) ──→ occupied? ──yes──→ vacate ──→ anyone waiting?
///                                                       │
///                                                       yes ──→ occupy (no history)
/// ```
///
/// Only bookings made through [`book_room`](Self::book_room) enter the
/// history. A waiting guest who takes over a room at checkout is not
/// recorded.
#[derive(Debug, Clone, Default)]
pub struct BookingService {
    rooms: RoomCollection,
    waiting: WaitingQueue,
    history: HistoryLog,
}

/// A serializable view of everything the service holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelSnapshot {
    pub rooms: RoomCollection,
    pub waiting: WaitingQueue,
    /// Oldest booking first.
    pub history: HistoryLog,
}

impl BookingService {
    /// Creates a service over an existing set of rooms, with nobody waiting
    /// and no history.
    pub fn new(rooms: RoomCollection) -> Self {
        Self {
            rooms,
            waiting: WaitingQueue::new(),
            history: HistoryLog::new(),
        }
    }

    /// Builds the rooms described by `config` and wraps them in a service.
    ///
    /// # Errors
    /// Returns the config's validation error; see [`HotelConfig::validate`].
    pub fn from_config(config: &HotelConfig) -> Result<Self, RoomError> {
        let rooms = RoomCollection::from_config(config)?;
        tracing::info!(rooms = rooms.len(), "hotel opened");
        Ok(Self::new(rooms))
    }

    /// Rooms that are free right now, in collection order.
    pub fn list_available(&self) -> Vec<&Room> {
        self.rooms.list_available()
    }

    /// Gives `guest` the first free room, or puts them on the waiting list.
    ///
    /// The name is taken as-is; an empty name is a valid guest.
    pub fn book_room(&mut self, guest: impl Into<String>) -> BookOutcome {
        let guest = guest.into();

        match self.rooms.find_available_room_mut() {
            Some(room) => {
                room.occupy(guest.clone());
                let room = room.id();
                self.history.push(room, guest.clone());
                tracing::info!(%room, %guest, "room booked");
                BookOutcome::Booked { room, guest }
            }
            None => {
                let position = self.waiting.enqueue(guest.clone());
                tracing::info!(%guest, position, "no room free, guest waitlisted");
                BookOutcome::Waitlisted { guest, position }
            }
        }
    }

    /// Checks the guest in room `id` out.
    ///
    /// If someone is waiting, the front of the line takes the room straight
    /// away. That handover is not written to the history.
    pub fn checkout_room(&mut self, id: RoomId) -> CheckoutOutcome {
        let Some(room) = self.rooms.find_room_mut(id) else {
            tracing::debug!(room = %id, "checkout for unknown room");
            return CheckoutOutcome::NotFound(id);
        };

        let Some(guest) = room.vacate() else {
            tracing::debug!(room = %id, "checkout for room that is already free");
            return CheckoutOutcome::AlreadyFree(id);
        };
        tracing::info!(room = %id, %guest, "room checked out");

        let next = self.waiting.dequeue();
        if let Some(next) = &next {
            room.occupy(next.clone());
            tracing::info!(
                room = %id,
                guest = %next,
                still_waiting = self.waiting.len(),
                "room handed to waiting guest"
            );
        }

        CheckoutOutcome::CheckedOut {
            room: id,
            guest,
            next,
        }
    }

    /// Reports the history, most recent booking first, and clears it.
    ///
    /// Calling this twice in a row returns [`HistoryReport::Empty`] the
    /// second time. Use [`history`](Self::history) and
    /// [`HistoryLog::peek`] to look without consuming.
    pub fn report_history(&mut self) -> HistoryReport {
        let records = self.history.drain();
        tracing::debug!(count = records.len(), "history drained");
        HistoryReport::from(records)
    }

    pub fn rooms(&self) -> &RoomCollection {
        &self.rooms
    }

    pub fn waiting(&self) -> &WaitingQueue {
        &self.waiting
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn snapshot(&self) -> HotelSnapshot {
        HotelSnapshot {
            rooms: self.rooms.clone(),
            waiting: self.waiting.clone(),
            history: self.history.clone(),
        }
    }
}
