//! # Hotel
//!
//! An in-memory hotel front desk. Rooms are created once at startup; guests
//! are booked into the first free room or join a waiting list, and every
//! booking lands in a check-in history.
//!
//! The crate ties the layers together: a [`Console`] reads menu choices,
//! turns them into [`Command`]s, runs them against the [`BookingService`]
//! and prints the [`Response`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hotel::prelude::*;
//!
//! # fn main() -> Result<(), HotelError> {
//! let service = BookingService::from_config(&HotelConfig::default())?;
//! let stdin = std::io::stdin();
//! let mut console = Console::new(service, stdin.lock(), std::io::stdout());
//! console.run()
//! # }
//! ```

mod console;
mod error;
mod handler;

pub use console::Console;
pub use error::HotelError;
pub use handler::{execute, Response};

pub use hotel_booking::{
    BookOutcome, BookingRecord, BookingService, CheckoutOutcome, HistoryLog,
    HistoryReport, HotelSnapshot, WaitingQueue,
};
pub use hotel_protocol::{Command, MenuChoice, ProtocolError, RoomId};
pub use hotel_room::{HotelConfig, Room, RoomCollection, RoomError, RoomState};

pub mod prelude {
    pub use crate::{
        BookOutcome, BookingService, CheckoutOutcome, Command, Console,
        HistoryReport, HotelConfig, HotelError, Response, RoomId,
    };
}
