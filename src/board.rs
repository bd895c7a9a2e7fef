//! Board state and the direction mapper.
//!
//! Every direction is reduced to the same lane merge: the board is sliced
//! into N lanes along the direction's [`Traversal`], each lane is merged
//! independently and the results are written back through the same
//! traversal into a fresh board.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::direction::{Direction, Traversal};
use crate::lane::merge_lane_scored;
use crate::tile::{Tile, TileId};

/// Occupancy mask of an N×N board.
pub type Mask<const N: usize> = BitBoard<u128, N>;

/// An N×N grid of tiles, stored row by row (`cells[y][x]`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize> {
    cells: [[Tile; N]; N],
}

/// Result of applying a direction to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome<const N: usize> {
    pub board: Board<N>,
    /// Whether any slot differs from the board the move started from.
    pub changed: bool,
    /// Sum of the values created by merges.
    pub score_gained: u64,
}

/// Compute the board that results from moving `board` in `direction`.
pub fn compute_next_board<const N: usize>(board: &Board<N>, direction: Direction) -> Board<N> {
    board.shift(direction)
}

impl<const N: usize> Board<N> {
    /// An empty board. Use [`Board::try_new`] to also check that the side
    /// fits the occupancy mask.
    pub const fn new() -> Self {
        Board {
            cells: [[Tile::EMPTY; N]; N],
        }
    }

    /// An empty board, rejecting sides too large for the occupancy mask.
    pub fn try_new() -> Result<Self, BoardError> {
        Mask::<N>::try_new()?;
        Ok(Self::new())
    }

    /// Build a board from tile values given row by row, `0` meaning empty.
    /// Active tiles get ids `1, 2, ...` in row-major order.
    pub fn from_values(values: [[u64; N]; N]) -> Self {
        let mut board = Self::new();
        let mut next_id: TileId = 1;
        for (y, row) in values.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value != 0 {
                    board.cells[y][x] = Tile::new(next_id, value);
                    next_id += 1;
                }
            }
        }
        board
    }

    /// Tile values row by row, `0` for empty slots.
    pub fn values(&self) -> [[u64; N]; N] {
        core::array::from_fn(|y| core::array::from_fn(|x| self.cells[y][x].value))
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Tile; N]; N] {
        &self.cells
    }

    pub fn tile(&self, x: usize, y: usize) -> Result<Tile, BoardError> {
        Self::check_bounds(x, y)?;
        Ok(self.cells[y][x])
    }

    pub fn set_tile(&mut self, x: usize, y: usize, tile: Tile) -> Result<(), BoardError> {
        Self::check_bounds(x, y)?;
        self.cells[y][x] = tile;
        Ok(())
    }

    /// Lane `index` of `traversal`, position 0 first.
    pub fn lane(&self, traversal: Traversal, index: usize) -> [Tile; N] {
        core::array::from_fn(|pos| {
            let (x, y) = traversal.cell::<N>(index, pos);
            self.cells[y][x]
        })
    }

    /// Write `lane` back as lane `index` of `traversal`.
    pub fn set_lane(&mut self, traversal: Traversal, index: usize, lane: [Tile; N]) {
        for (pos, tile) in lane.into_iter().enumerate() {
            let (x, y) = traversal.cell::<N>(index, pos);
            self.cells[y][x] = tile;
        }
    }

    /// The board after sliding and merging towards `direction`.
    pub fn shift(&self, direction: Direction) -> Board<N> {
        self.apply(direction).board
    }

    /// Slide and merge towards `direction`, reporting what changed.
    pub fn apply(&self, direction: Direction) -> MoveOutcome<N> {
        let traversal = direction.traversal();
        let mut next = *self;
        let mut score_gained = 0u64;
        for index in 0..N {
            let (lane, gained) = merge_lane_scored(self.lane(traversal, index));
            next.set_lane(traversal, index, lane);
            score_gained = score_gained.saturating_add(gained);
        }
        MoveOutcome {
            board: next,
            changed: next != *self,
            score_gained,
        }
    }

    /// Whether any direction changes the board.
    pub fn can_move(&self) -> bool {
        Direction::ALL.into_iter().any(|d| self.apply(d).changed)
    }

    /// Cells holding an active tile.
    pub fn occupancy(&self) -> Result<Mask<N>, BoardError> {
        let active = self.positions().filter(|&(x, y)| self.cells[y][x].is_active);
        Ok(Mask::<N>::from_cells(active)?)
    }

    /// Cells a new tile could spawn into.
    pub fn empty_cells(&self) -> Result<Mask<N>, BoardError> {
        Ok(!self.occupancy()?)
    }

    pub fn active_count(&self) -> usize {
        self.tiles().filter(|t| t.is_active).count()
    }

    /// Sum of all tile values.
    pub fn total(&self) -> u64 {
        self.tiles().fold(0u64, |acc, t| acc.saturating_add(t.value))
    }

    pub fn highest_value(&self) -> u64 {
        self.tiles().map(|t| t.value).max().unwrap_or(0)
    }

    /// Largest tile id on the board, `0` when empty.
    pub fn max_id(&self) -> TileId {
        self.tiles().map(|t| t.id).max().unwrap_or(0)
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flat_map(|row| row.iter())
    }

    fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        (0..N).flat_map(|y| (0..N).map(move |x| (x, y)))
    }

    fn check_bounds(x: usize, y: usize) -> Result<(), BoardError> {
        if x >= N || y >= N {
            Err(BoardError::OutOfBounds { x, y })
        } else {
            Ok(())
        }
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board").field("values", &self.values()).finish()
    }
}

/// Grid of values, right-aligned, `.` for empty slots.
impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            for tile in row {
                match tile.current_value() {
                    Some(v) => write!(f, "{:>6}", v)?,
                    None => write!(f, "{:>6}", '.')?,
                }
            }
            if y + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
