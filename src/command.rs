//! Rover commands and the factories that bind them to call signs.

use crate::rover::Rover;
use serde::{Deserialize, Serialize};

/// One atomic state transition a rover can perform.
///
/// A command describes a relative transform. Executing it twice applies the
/// transform twice, each time from whatever the rover's state is at that moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Change heading by this many degrees. Positive turns left (counter-clockwise),
    /// negative turns right (clockwise).
    Turn(i32),
    /// Advance along the current heading by this many units.
    MoveForward(i32),
}

/// Produces the [`Command`] a call sign is bound to, given the rover it will act on.
///
/// Factories are held by [`RoverBuilder`](crate::RoverBuilder) and resolved
/// once, when the rover is built. They are not kept afterwards.
///
/// ```ignore
/// let builder = RoverBuilder::new()
///     .add_command('H', |rover: &Rover| rover.turn(45))
///     .add_command('J', Command::MoveForward(3));
/// ```
pub trait CommandFactory {
    fn command(&self, rover: &Rover) -> Command;
}

impl<F> CommandFactory for F
where
    F: Fn(&Rover) -> Command,
{
    fn command(&self, rover: &Rover) -> Command {
        self(rover)
    }
}

impl CommandFactory for Command {
    fn command(&self, _rover: &Rover) -> Command {
        *self
    }
}
