//! Move directions and how they map onto lanes.

use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;

/// A swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Axis a lane runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Lanes are rows; lane `i` is row `y = i`.
    Horizontal,
    /// Lanes are columns; lane `i` is column `x = i`.
    Vertical,
}

/// How a direction walks the board: which axis the lanes run along and
/// whether position 0 of a lane is the far (right/bottom) end of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Traversal {
    pub orientation: Orientation,
    pub reversed: bool,
}

impl Traversal {
    /// Board cell `(x, y)` at position `pos` of lane `lane`.
    pub fn cell<const N: usize>(&self, lane: usize, pos: usize) -> (usize, usize) {
        let along = if self.reversed { N - 1 - pos } else { pos };
        match self.orientation {
            Orientation::Horizontal => (along, lane),
            Orientation::Vertical => (lane, along),
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn traversal(self) -> Traversal {
        let (orientation, reversed) = match self {
            Direction::Up => (Orientation::Vertical, false),
            Direction::Down => (Orientation::Vertical, true),
            Direction::Left => (Orientation::Horizontal, false),
            Direction::Right => (Orientation::Horizontal, true),
        };
        Traversal {
            orientation,
            reversed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = BoardError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(token))
            .ok_or(BoardError::UnknownDirection)
    }
}
