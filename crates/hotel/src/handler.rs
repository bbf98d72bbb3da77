//! Command dispatch: runs one [`Command`] against the booking service.

use std::fmt;

use hotel_booking::{BookOutcome, BookingService, CheckoutOutcome, HistoryReport};
use hotel_protocol::{Command, RoomId};
use serde::{Deserialize, Serialize};

/// What the desk says back after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// Free rooms, in collection order.
    Available(Vec<RoomId>),
    Booked(BookOutcome),
    CheckedOut(CheckoutOutcome),
    History(HistoryReport),
    Goodbye,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(rooms) => {
                write!(f, "Available Rooms:")?;
                for room in rooms {
                    write!(f, "\nRoom {room} is available.")?;
                }
                Ok(())
            }
            Self::Booked(outcome) => write!(f, "{outcome}"),
            Self::CheckedOut(outcome) => write!(f, "{outcome}"),
            Self::History(report) => write!(f, "{report}"),
            Self::Goodbye => write!(f, "Exiting system. Goodbye!"),
        }
    }
}

/// Runs a single command.
///
/// Every command succeeds; the response says what happened.
pub fn execute(service: &mut BookingService, command: Command) -> Response {
    tracing::debug!(choice = ?command.choice(), "executing command");
    match command {
        Command::ListAvailable => Response::Available(
            service.list_available().iter().map(|room| room.id()).collect(),
        ),
        Command::Book { guest } => Response::Booked(service.book_room(guest)),
        Command::Checkout { room } => Response::CheckedOut(service.checkout_room(room)),
        Command::History => Response::History(service.report_history()),
        Command::Exit => Response::Goodbye,
    }
}
