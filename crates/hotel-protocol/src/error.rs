//! Error types for the protocol layer.
//!
//! Each crate in the workspace defines its own error enum. When you see a
//! `ProtocolError`, you know the operator typed something that could not be
//! read, not that a room was missing or the terminal went away.

/// Errors that can occur while reading operator input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// The menu selection is not one of the numbered entries.
    ///
    /// Carries the raw (trimmed) text so the dispatcher can log it.
    #[error("invalid menu choice: {0:?}")]
    InvalidChoice(String),

    /// The room number is not an integer.
    #[error("invalid room number: {0:?}")]
    InvalidRoomNumber(String),
}
