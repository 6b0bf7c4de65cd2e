//! Error type shared by every fallible rover operation.

use thiserror::Error;

/// Errors raised by the rover state machine.
///
/// Both variants are caller mistakes. The rover's state is left untouched when
/// one is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RoverError {
    /// A direction below zero was passed to
    /// [`Rover::set_direction`](crate::Rover::set_direction).
    #[error("direction must not be negative, got {degrees}")]
    NegativeDirection { degrees: i32 },

    /// [`Rover::execute_commands`](crate::Rover::execute_commands) was called without
    /// a command sequence.
    #[error("command sequence is missing")]
    MissingCommands,
}

impl RoverError {
    /// Returns true for errors caused by an invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::NegativeDirection { .. } | Self::MissingCommands)
    }
}
