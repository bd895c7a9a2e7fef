//! Board geometry and game constants.

use crate::board::Board;

/// Side length of the standard board.
pub const BOARD_SIZE: usize = 4;

/// The standard 4×4 board.
pub type StandardBoard = Board<BOARD_SIZE>;

/// Largest side whose N×N cells fit in the 128-bit occupancy mask.
pub const MAX_BOARD_SIZE: usize = 11;

/// Tile value that counts as a win.
pub const WIN_VALUE: u64 = 2048;

/// Number of tiles spawned when a game starts.
pub const INITIAL_TILES: usize = 2;

/// Value of a regular spawned tile.
pub const SPAWN_LOW: u64 = 2;
/// Value of a rare spawned tile.
pub const SPAWN_HIGH: u64 = 4;
/// Probability that a spawned tile takes `SPAWN_LOW`.
pub const SPAWN_LOW_PROBABILITY: f64 = 0.9;
