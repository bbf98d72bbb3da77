//! The interactive menu loop.
//!
//! The console is the command dispatcher: it owns the booking service for
//! the whole session, reads one menu choice at a time, prompts for whatever
//! the choice still needs and prints the response. The flow per turn is:
//!   1. Print the menu, prompt for a choice
//!   2. Prompt for a guest name or room number if the choice needs one
//!   3. Execute the command → print the response
//!
//! Unreadable input is reported and the loop carries on. End of input ends
//! the session the same way choosing Exit does.

use std::io::{self, BufRead, Write};

use hotel_booking::BookingService;
use hotel_protocol::{parse_guest_name, parse_room_number, Command, MenuChoice, ProtocolError};

use crate::{execute, HotelError, Response};

/// Menu-driven front end over any line reader and writer.
///
/// Generic over its I/O so the binary can hand it stdin/stdout and tests
/// can hand it a `Cursor` and a `Vec<u8>`.
pub struct Console<R, W> {
    service: BookingService,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(service: BookingService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs the menu loop until the operator exits or input runs out.
    ///
    /// # Errors
    /// Returns [`HotelError::Io`] if the terminal can't be read or written.
    /// Bad menu choices and room numbers are reported to the operator, not
    /// returned.
    pub fn run(&mut self) -> Result<(), HotelError> {
        tracing::info!(rooms = self.service.rooms().len(), "desk open");

        loop {
            self.print_menu()?;

            let command = match self.read_command() {
                Ok(Some(command)) => command,
                Ok(None) => {
                    tracing::info!("input closed");
                    writeln!(self.output)?;
                    break;
                }
                Err(HotelError::Protocol(err)) => {
                    tracing::warn!(error = %err, "rejected input");
                    writeln!(self.output, "{}", rejection_message(&err))?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            let response = self.execute(command);
            writeln!(self.output, "{response}")?;
            if response == Response::Goodbye {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Runs one command without any terminal I/O.
    pub fn execute(&mut self, command: Command) -> Response {
        execute(&mut self.service, command)
    }

    pub fn service(&self) -> &BookingService {
        &self.service
    }

    /// Ends the session, handing back the final state and the output sink.
    pub fn into_parts(self) -> (BookingService, W) {
        (self.service, self.output)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Hotel Management System:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{choice}")?;
        }
        Ok(())
    }

    /// Reads a choice plus any follow-up answer. `None` means input ended.
    fn read_command(&mut self) -> Result<Option<Command>, HotelError> {
        let Some(line) = self.prompt("Enter your choice: ")? else {
            return Ok(None);
        };

        let command = match line.parse::<MenuChoice>()? {
            MenuChoice::ListAvailable => Command::ListAvailable,
            MenuChoice::Book => {
                let Some(line) = self.prompt("Enter guest name: ")? else {
                    return Ok(None);
                };
                Command::Book {
                    guest: parse_guest_name(&line),
                }
            }
            MenuChoice::Checkout => {
                let Some(line) = self.prompt("Enter room number to check out: ")? else {
                    return Ok(None);
                };
                Command::Checkout {
                    room: parse_room_number(&line)?,
                }
            }
            MenuChoice::History => Command::History,
            MenuChoice::Exit => Command::Exit,
        };
        Ok(Some(command))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn rejection_message(err: &ProtocolError) -> &'static str {
    match err {
        ProtocolError::InvalidChoice(_) => "Invalid choice. Please try again.",
        ProtocolError::InvalidRoomNumber(_) => "Invalid room number.",
    }
}
