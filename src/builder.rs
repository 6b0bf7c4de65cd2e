//! Assembles a [`Rover`] from a starting state and a call-sign table.

use crate::command::{Command, CommandFactory};
use crate::config::RoverConfig;
use crate::direction::CardinalDirection;
use crate::position::Position;
use crate::rover::Rover;
use std::collections::HashMap;
use std::fmt;

/// Builder for [`Rover`].
///
/// Defaults to facing [`CardinalDirection::North`] at the origin with no commands.
/// Nothing is validated here: the starting direction and position are stored as
/// given, without normalization or notification.
pub struct RoverBuilder {
    direction: i32,
    position: Position,
    factories: HashMap<char, Box<dyn CommandFactory>>,
}

impl Default for RoverBuilder {
    fn default() -> Self {
        Self {
            direction: CardinalDirection::North.degrees(),
            position: Position::ORIGIN,
            factories: HashMap::new(),
        }
    }
}

impl RoverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from a [`RoverConfig`].
    pub fn from_config(config: &RoverConfig) -> Self {
        let builder = Self::new()
            .direction(config.direction)
            .position(config.position);
        if config.default_commands {
            builder.add_default_commands()
        } else {
            builder
        }
    }

    /// Starting heading in degrees.
    pub fn direction(mut self, initial_direction: i32) -> Self {
        self.direction = initial_direction;
        self
    }

    pub fn position(mut self, initial_position: impl Into<Position>) -> Self {
        self.position = initial_position.into();
        self
    }

    /// Binds `call_sign` to the command `factory` produces. A later binding for the
    /// same call sign replaces the earlier one.
    pub fn add_command(mut self, call_sign: char, factory: impl CommandFactory + 'static) -> Self {
        self.factories.insert(call_sign, Box::new(factory));
        self
    }

    /// Binds `L` to a left turn of 90 degrees, `R` to a right turn of 90 degrees
    /// and `F` to one unit forward.
    pub fn add_default_commands(self) -> Self {
        self.add_command('L', |rover: &Rover| rover.turn(90))
            .add_command('R', |rover: &Rover| rover.turn(-90))
            .add_command('F', |rover: &Rover| rover.move_forward(1))
    }

    /// Creates the rover and resolves every factory against it.
    pub fn build(self) -> Rover {
        let mut rover = Rover::with_state(self.direction, self.position);
        let bound: Vec<(char, Command)> = self
            .factories
            .iter()
            .map(|(&call_sign, factory)| (call_sign, factory.command(&rover)))
            .collect();
        for (call_sign, command) in bound {
            rover.bind(call_sign, command);
        }
        tracing::debug!(
            direction = rover.direction(),
            position = %rover.position(),
            commands = rover.call_signs().len(),
            "Rover built"
        );
        rover
    }
}

impl fmt::Debug for RoverBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut call_signs: Vec<char> = self.factories.keys().copied().collect();
        call_signs.sort_unstable();
        f.debug_struct("RoverBuilder")
            .field("direction", &self.direction)
            .field("position", &self.position)
            .field("commands", &call_signs)
            .finish()
    }
}
