//! Cardinal headings and degree arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of degrees in a full turn.
pub const FULL_TURN: i32 = 360;

/// The four cardinal directions on the Cartesian plane, matched with their degree values.
///
/// This is a reference table. A rover's live heading may be any value in `[0, 360)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardinalDirection {
    East,
    #[default]
    North,
    South,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [Self::East, Self::North, Self::South, Self::West];

    /// Heading in degrees, counter-clockwise from the +x axis.
    pub const fn degrees(self) -> i32 {
        match self {
            Self::East => 0,
            Self::North => 90,
            Self::South => 270,
            Self::West => 180,
        }
    }

    /// Looks up the cardinal direction with exactly this heading.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.degrees() == degrees)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::East => "EAST",
            Self::North => "NORTH",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} degrees)", self.name(), self.degrees())
    }
}

/// Brings the result of a clockwise turn back into `[0, 360)`.
///
/// `current + degrees` may be negative here; the remainder keeps the sign of the
/// dividend, so one extra full turn is added when it does.
pub(crate) fn clockwise(current: i32, degrees: i32) -> i32 {
    let turned = (current % FULL_TURN + degrees % FULL_TURN) % FULL_TURN;
    if turned < 0 { turned + FULL_TURN } else { turned }
}
