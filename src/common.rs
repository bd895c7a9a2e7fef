//! Common types: the board error taxonomy.

use crate::bitboard::BitBoardError;

/// Broad category of a [`BoardError`].
///
/// Every failure the crate reports is a caller contract violation; there are
/// no recoverable runtime failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

/// Errors returned by board, lane and snapshot operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., board too large for the mask).
    BitBoardError(BitBoardError),
    /// Direction token is not one of up, down, left, right.
    UnknownDirection,
    /// Lane does not hold exactly one slot per board cell along its axis.
    LaneLength { expected: usize, found: usize },
    /// Snapshot side length does not match the board type.
    BoardSize { expected: usize, found: usize },
    /// Snapshot does not hold exactly N×N tiles.
    TileCount { expected: usize, found: usize },
    /// Coordinates fall outside the board.
    OutOfBounds { x: usize, y: usize },
    /// Two records claim the same cell.
    DuplicateCoordinates { x: usize, y: usize },
    /// Two active tiles share an id.
    DuplicateId(u32),
    /// Tile fields contradict each other (e.g., an empty slot with a value).
    MalformedTile { x: usize, y: usize },
    /// No empty cell is left to spawn into.
    BoardFull,
}

impl BoardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::BitBoardError(_)
            | BoardError::UnknownDirection
            | BoardError::LaneLength { .. }
            | BoardError::BoardSize { .. }
            | BoardError::TileCount { .. }
            | BoardError::OutOfBounds { .. }
            | BoardError::DuplicateCoordinates { .. }
            | BoardError::DuplicateId(_)
            | BoardError::MalformedTile { .. }
            | BoardError::BoardFull => ErrorKind::InvalidArgument,
        }
    }
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::UnknownDirection => {
                write!(f, "Unknown direction (expected up, down, left or right)")
            }
            BoardError::LaneLength { expected, found } => {
                write!(f, "Lane holds {} slots, expected {}", found, expected)
            }
            BoardError::BoardSize { expected, found } => {
                write!(f, "Board side is {}, expected {}", found, expected)
            }
            BoardError::TileCount { expected, found } => {
                write!(f, "Snapshot holds {} tiles, expected {}", found, expected)
            }
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Coordinates [{}, {}] are outside the board", x, y)
            }
            BoardError::DuplicateCoordinates { x, y } => {
                write!(f, "More than one tile at [{}, {}]", x, y)
            }
            BoardError::DuplicateId(id) => write!(f, "Tile id {} is used more than once", id),
            BoardError::MalformedTile { x, y } => {
                write!(f, "Tile at [{}, {}] has inconsistent fields", x, y)
            }
            BoardError::BoardFull => write!(f, "No empty cell left on the board"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
