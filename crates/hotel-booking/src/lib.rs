//! Booking logic for the hotel desk.
//!
//! [`BookingService`] is the single owner of the hotel's state: the rooms,
//! the waiting list, and the check-in history. Every operation runs to
//! completion and returns an outcome describing what happened; nothing in
//! this crate fails.
//!
//! # Key types
//!
//! - [`BookingService`] — book, check out, report
//! - [`WaitingQueue`] — guests waiting for a room, first come first served
//! - [`HistoryLog`] — bookings, most recent first, consumed when reported
//! - [`BookOutcome`], [`CheckoutOutcome`], [`HistoryReport`] — results,
//!   each printable as the desk's message

mod history;
mod outcome;
mod queue;
mod service;

pub use history::{BookingRecord, HistoryLog};
pub use outcome::{BookOutcome, CheckoutOutcome, HistoryReport};
pub use queue::WaitingQueue;
pub use service::{BookingService, HotelSnapshot};
