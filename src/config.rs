use crate::direction::CardinalDirection;
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Starting configuration for a rover.
///
/// Every field is optional when deserializing; missing fields take their
/// [`Default`] values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoverConfig {
    /// Starting heading in degrees. Default: 90 (North).
    pub direction: i32,
    /// Starting position. Default: the origin.
    pub position: Position,
    /// Whether to bind the standard `L`/`R`/`F` call signs. Default: true.
    pub default_commands: bool,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            direction: CardinalDirection::North.degrees(),
            position: Position::ORIGIN,
            default_commands: true,
        }
    }
}
