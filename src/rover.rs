//! The rover state machine.
//!
//! A [`Rover`] holds a heading and a position, maps call-sign characters to
//! [`Command`]s, and announces every state change to its subscribers. Build one
//! with [`RoverBuilder`](crate::RoverBuilder), then feed it command strings through
//! [`Rover::execute_commands`].

use crate::command::Command;
use crate::direction::{CardinalDirection, FULL_TURN, clockwise};
use crate::error::RoverError;
use crate::events::{
    DirectionChanged, PositionChanged, SubscriptionId, SubscriptionIds, Subscribers,
};
use crate::position::Position;
use glam::DVec2;
use std::collections::HashMap;
use std::fmt;

/// The command surface shared by every robot model.
pub trait Robot {
    /// Executes each character of `commands` in order. See [`Rover::execute_commands`].
    fn execute_commands(&mut self, commands: Option<&str>) -> Result<ExecutionReport, RoverError>;

    /// A command that advances `movement_units` along the heading current at execution time.
    fn move_forward(&self, movement_units: i32) -> Command;

    /// A command that turns left for positive `degrees` and right for negative ones.
    fn turn(&self, degrees: i32) -> Command;
}

/// Outcome of one [`Rover::execute_commands`] batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    /// Number of characters that were dispatched to a bound command.
    pub executed: usize,
    /// Characters with no bound command, in input order.
    pub unknown: Vec<char>,
}

impl ExecutionReport {
    /// True when every character had a bound command.
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty()
    }
}

/// A planar rover driven by single-character commands.
pub struct Rover {
    /// Heading in degrees, counter-clockwise from +x. Kept in `[0, 360)` by every mutation.
    direction: i32,
    position: Position,
    commands: HashMap<char, Command>,
    direction_subscribers: Subscribers<DirectionChanged>,
    position_subscribers: Subscribers<PositionChanged>,
    subscription_ids: SubscriptionIds,
}

impl Rover {
    /// Starting state is stored as given; no validation and no notification.
    pub(crate) fn with_state(direction: i32, position: Position) -> Self {
        Self {
            direction,
            position,
            commands: HashMap::new(),
            direction_subscribers: Subscribers::new(),
            position_subscribers: Subscribers::new(),
            subscription_ids: SubscriptionIds::default(),
        }
    }

    pub(crate) fn bind(&mut self, call_sign: char, command: Command) {
        self.commands.insert(call_sign, command);
    }

    /// Executes `commands` one character at a time, in order.
    ///
    /// Call signs are matched case-sensitively. A character with no bound command is
    /// logged, recorded in the returned report, and skipped; it never aborts the batch.
    ///
    /// # Errors
    ///
    /// [`RoverError::MissingCommands`] when `commands` is `None`. Any error raised by
    /// a command stops the batch; commands already executed stay applied.
    pub fn execute_commands<'a>(
        &mut self,
        commands: impl Into<Option<&'a str>>,
    ) -> Result<ExecutionReport, RoverError> {
        let commands = commands.into().ok_or(RoverError::MissingCommands)?;
        let mut report = ExecutionReport::default();

        for call_sign in commands.chars() {
            match self.commands.get(&call_sign).copied() {
                Some(command) => {
                    tracing::trace!(%call_sign, ?command, "Dispatching command");
                    self.execute(command)?;
                    report.executed += 1;
                }
                None => {
                    tracing::warn!(%call_sign, "Unknown command");
                    report.unknown.push(call_sign);
                }
            }
        }

        Ok(report)
    }

    /// Applies a single command against the current state.
    pub fn execute(&mut self, command: Command) -> Result<(), RoverError> {
        match command {
            Command::Turn(degrees) if degrees < 0 => {
                self.set_direction(clockwise(self.direction, degrees))
            }
            // Left turns pass the raw sum and leave the wrap-around to `set_direction`.
            // Only a sum past i32::MAX is reduced first; it has the same remainder.
            Command::Turn(degrees) => match self.direction.checked_add(degrees) {
                Some(turned) => self.set_direction(turned),
                None => self.set_direction(self.direction % FULL_TURN + degrees % FULL_TURN),
            },
            Command::MoveForward(units) => {
                let heading = f64::from(self.direction).to_radians();
                let offset = DVec2::from_angle(heading) * f64::from(units);
                self.set_position(self.position.translated(offset));
                Ok(())
            }
        }
    }

    /// Sets the heading to `degrees mod 360` and notifies direction subscribers.
    ///
    /// # Errors
    ///
    /// [`RoverError::NegativeDirection`] when `degrees < 0`; nothing is stored or published.
    pub fn set_direction(&mut self, degrees: i32) -> Result<(), RoverError> {
        if degrees < 0 {
            return Err(RoverError::NegativeDirection { degrees });
        }

        let old = self.direction;
        self.direction = degrees % FULL_TURN;
        tracing::debug!(old, new = self.direction, "Direction changed");
        self.direction_subscribers.publish(&DirectionChanged {
            old,
            new: self.direction,
        });
        Ok(())
    }

    /// Replaces the position and notifies position subscribers.
    pub fn set_position(&mut self, position: Position) {
        let old = self.position;
        self.position = position;
        tracing::debug!(%old, new = %self.position, "Position changed");
        self.position_subscribers.publish(&PositionChanged {
            old,
            new: self.position,
        });
    }

    pub fn direction(&self) -> i32 {
        self.direction
    }

    /// The cardinal direction the rover faces, if its heading is exactly one.
    pub fn cardinal(&self) -> Option<CardinalDirection> {
        CardinalDirection::from_degrees(self.direction)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// A command that turns by `degrees`; positive is left, negative is right.
    pub fn turn(&self, degrees: i32) -> Command {
        Command::Turn(degrees)
    }

    /// A command that moves `movement_units` along the heading current at execution time.
    pub fn move_forward(&self, movement_units: i32) -> Command {
        Command::MoveForward(movement_units)
    }

    /// The command bound to `call_sign`, if any.
    pub fn command(&self, call_sign: char) -> Option<Command> {
        self.commands.get(&call_sign).copied()
    }

    pub fn has_command(&self, call_sign: char) -> bool {
        self.commands.contains_key(&call_sign)
    }

    /// All registered call signs, sorted.
    pub fn call_signs(&self) -> Vec<char> {
        let mut signs: Vec<char> = self.commands.keys().copied().collect();
        signs.sort_unstable();
        signs
    }

    /// Subscribes to direction changes. Listeners run synchronously, in registration order.
    pub fn subscribe_direction<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&DirectionChanged) + Send + 'static,
    {
        let id = self.subscription_ids.next_id();
        self.direction_subscribers.add(id, Box::new(listener));
        id
    }

    /// Subscribes to position changes. Listeners run synchronously, in registration order.
    pub fn subscribe_position<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&PositionChanged) + Send + 'static,
    {
        let id = self.subscription_ids.next_id();
        self.position_subscribers.add(id, Box::new(listener));
        id
    }

    /// Removes a subscription from whichever channel holds it. Returns false if it was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.direction_subscribers.remove(id) || self.position_subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.direction_subscribers.len() + self.position_subscribers.len()
    }
}

impl Robot for Rover {
    fn execute_commands(&mut self, commands: Option<&str>) -> Result<ExecutionReport, RoverError> {
        Rover::execute_commands(self, commands)
    }

    fn move_forward(&self, movement_units: i32) -> Command {
        Rover::move_forward(self, movement_units)
    }

    fn turn(&self, degrees: i32) -> Command {
        Rover::turn(self, degrees)
    }
}

impl fmt::Debug for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rover")
            .field("direction", &self.direction)
            .field("position", &self.position)
            .field("commands", &self.call_signs())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
