//! Menu commands and the parsers that build them from raw input lines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ProtocolError, RoomId};

// ---------------------------------------------------------------------------
// MenuChoice
// ---------------------------------------------------------------------------

/// One of the five numbered entries on the desk menu.
///
/// A choice is not yet a complete request: `Book` still needs a guest name
/// and `Checkout` still needs a room number. The dispatcher prompts for
/// those and then builds a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuChoice {
    ListAvailable,
    Book,
    Checkout,
    History,
    Exit,
}

impl MenuChoice {
    /// Every entry, in menu order.
    pub const ALL: [MenuChoice; 5] = [
        Self::ListAvailable,
        Self::Book,
        Self::Checkout,
        Self::History,
        Self::Exit,
    ];

    /// The number the operator types to select this entry.
    pub fn number(self) -> u8 {
        match self {
            Self::ListAvailable => 1,
            Self::Book => 2,
            Self::Checkout => 3,
            Self::History => 4,
            Self::Exit => 5,
        }
    }

    /// The label printed next to the number.
    pub fn label(self) -> &'static str {
        match self {
            Self::ListAvailable => "Display Available Rooms",
            Self::Book => "Book a Room",
            Self::Checkout => "Check-out a Room",
            Self::History => "Display Check-in History",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Parses a menu line. Surrounding whitespace is ignored.
impl FromStr for MenuChoice {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number: u8 = trimmed
            .parse()
            .map_err(|_| ProtocolError::InvalidChoice(trimmed.to_string()))?;
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or_else(|| ProtocolError::InvalidChoice(trimmed.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A fully-resolved request for the booking service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// List every room that is currently free.
    ListAvailable,
    /// Book the first free room for a guest, or put them on the waiting list.
    Book { guest: String },
    /// Free a room, handing it to the next waiting guest if there is one.
    Checkout { room: RoomId },
    /// Print (and consume) the booking history.
    History,
    /// Leave the menu loop.
    Exit,
}

impl Command {
    /// The menu entry this command was selected through.
    pub fn choice(&self) -> MenuChoice {
        match self {
            Self::ListAvailable => MenuChoice::ListAvailable,
            Self::Book { .. } => MenuChoice::Book,
            Self::Checkout { .. } => MenuChoice::Checkout,
            Self::History => MenuChoice::History,
            Self::Exit => MenuChoice::Exit,
        }
    }
}

// ---------------------------------------------------------------------------
// Parsers
// ---------------------------------------------------------------------------

/// Parses the answer to the "room number" prompt.
///
/// # Errors
/// Returns [`ProtocolError::InvalidRoomNumber`] if the trimmed text is not
/// an integer.
pub fn parse_room_number(line: &str) -> Result<RoomId, ProtocolError> {
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map(RoomId)
        .map_err(|_| ProtocolError::InvalidRoomNumber(trimmed.to_string()))
}

/// Reads the answer to the "guest name" prompt.
///
/// The whole line is the name, inner and leading spaces included. Only the
/// line terminator is removed. An empty line is an empty name.
pub fn parse_guest_name(line: &str) -> String {
    line.trim_end_matches(['\n', '\r']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parses_each_number() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::ListAvailable));
        assert_eq!("2".parse::<MenuChoice>(), Ok(MenuChoice::Book));
        assert_eq!("3".parse::<MenuChoice>(), Ok(MenuChoice::Checkout));
        assert_eq!("4".parse::<MenuChoice>(), Ok(MenuChoice::History));
        assert_eq!(" 5\n".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn test_menu_choice_rejects_out_of_range_and_garbage() {
        assert_eq!(
            "0".parse::<MenuChoice>(),
            Err(ProtocolError::InvalidChoice("0".into()))
        );
        assert_eq!(
            "6".parse::<MenuChoice>(),
            Err(ProtocolError::InvalidChoice("6".into()))
        );
        assert_eq!(
            "book\n".parse::<MenuChoice>(),
            Err(ProtocolError::InvalidChoice("book".into()))
        );
    }

    #[test]
    fn test_menu_choice_display() {
        assert_eq!(MenuChoice::Book.to_string(), "2. Book a Room");
        assert_eq!(MenuChoice::Exit.to_string(), "5. Exit");
    }

    #[test]
    fn test_command_choice() {
        let cmd = Command::Checkout { room: RoomId(3) };
        assert_eq!(cmd.choice(), MenuChoice::Checkout);
        assert_eq!(Command::History.choice(), MenuChoice::History);
    }

    #[test]
    fn test_parse_room_number() {
        assert_eq!(parse_room_number(" 7 \n"), Ok(RoomId(7)));
        assert_eq!(parse_room_number("-2"), Ok(RoomId(-2)));
        assert_eq!(
            parse_room_number("seven"),
            Err(ProtocolError::InvalidRoomNumber("seven".into()))
        );
        assert_eq!(
            parse_room_number(""),
            Err(ProtocolError::InvalidRoomNumber(String::new()))
        );
    }

    #[test]
    fn test_parse_guest_name_keeps_spaces() {
        assert_eq!(parse_guest_name("Ada Lovelace\n"), "Ada Lovelace");
        assert_eq!(parse_guest_name("  Bob \r\n"), "  Bob ");
        assert_eq!(parse_guest_name("\n"), "");
    }

    #[test]
    fn test_protocol_error_display() {
        let err = ProtocolError::InvalidChoice("x".into());
        assert_eq!(err.to_string(), "invalid menu choice: \"x\"");
    }
}
