//! Caller-owned game state: the board, score keeping and tile spawning.
//!
//! The engine commits whole boards computed by the direction mapper; it never
//! edits tiles in place except to spawn new ones into empty cells.

use log::{debug, trace};
use rand::Rng;

use crate::{
    board::{Board, MoveOutcome},
    common::BoardError,
    config::{INITIAL_TILES, SPAWN_HIGH, SPAWN_LOW, SPAWN_LOW_PROBABILITY, WIN_VALUE},
    direction::Direction,
    snapshot::BoardSnapshot,
    tile::{Tile, TileId},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Serializable overall game state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: BoardSnapshot,
    pub score: u64,
    pub moves: usize,
    pub next_id: TileId,
}

/// A tile placed by [`GameEngine::spawn_tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub x: usize,
    pub y: usize,
    pub tile: Tile,
}

/// Result of playing one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub direction: Direction,
    pub changed: bool,
    pub score_gained: u64,
    /// Tile spawned after the move; `None` for a move that changed nothing.
    pub spawned: Option<Spawn>,
}

/// Holds the authoritative board between moves.
pub struct GameEngine<const N: usize> {
    board: Board<N>,
    score: u64,
    moves: usize,
    next_id: TileId,
}

impl<const N: usize> GameEngine<N> {
    /// Engine with an empty board and no score.
    pub fn new() -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::try_new()?,
            score: 0,
            moves: 0,
            next_id: 1,
        })
    }

    /// Engine holding `board`, which must be a board at rest.
    pub fn with_board(board: Board<N>) -> Result<Self, BoardError> {
        let mut engine = Self::new()?;
        engine.set_board(board)?;
        Ok(engine)
    }

    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    /// Replace the board. Rejects boards with malformed tiles or reused ids.
    pub fn set_board(&mut self, board: Board<N>) -> Result<(), BoardError> {
        // Round-trip through the record form to reuse its validation.
        let checked = Board::<N>::try_from(&BoardSnapshot::from(&board))?;
        self.next_id = match checked.max_id().checked_add(1) {
            Some(after) => self.next_id.max(after),
            None => TileId::MAX,
        };
        self.board = checked;
        Ok(())
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of moves that changed the board.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Spawn the opening tiles.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for _ in 0..INITIAL_TILES {
            self.spawn_tile(rng)?;
        }
        Ok(())
    }

    /// Place a new tile on a random empty cell: `SPAWN_LOW` most of the
    /// time, otherwise `SPAWN_HIGH`.
    pub fn spawn_tile<R: Rng>(&mut self, rng: &mut R) -> Result<Spawn, BoardError> {
        let empty = self.board.empty_cells()?;
        let free = empty.count_ones();
        if free == 0 {
            return Err(BoardError::BoardFull);
        }
        let (x, y) = empty
            .nth_cell(rng.random_range(0..free))
            .ok_or(BoardError::BoardFull)?;
        let value = if rng.random_bool(SPAWN_LOW_PROBABILITY) {
            SPAWN_LOW
        } else {
            SPAWN_HIGH
        };
        let tile = Tile::new(self.fresh_id()?, value);
        self.board.set_tile(x, y, tile)?;
        if let Some(after) = tile.id.checked_add(1) {
            self.next_id = self.next_id.max(after);
        }
        debug!("spawned {} at [{}, {}] (id {})", value, x, y, tile.id);
        Ok(Spawn { x, y, tile })
    }

    /// Id for the next spawned tile: the running counter while it lasts,
    /// then the lowest id no tile on the board carries.
    fn fresh_id(&self) -> Result<TileId, BoardError> {
        if !self.is_live(self.next_id) {
            return Ok(self.next_id);
        }
        (1..=TileId::MAX)
            .find(|&id| !self.is_live(id))
            .ok_or(BoardError::BoardFull)
    }

    fn is_live(&self, id: TileId) -> bool {
        self.board.tiles().any(|t| t.is_active && t.id == id)
    }

    /// Move without spawning: compute and commit the next board.
    pub fn shift(&mut self, direction: Direction) -> MoveOutcome<N> {
        let outcome = self.board.apply(direction);
        if outcome.changed {
            self.board = outcome.board;
            self.score = self.score.saturating_add(outcome.score_gained);
            self.moves += 1;
            debug!(
                "moved {}: +{} (score {}, move {})",
                direction, outcome.score_gained, self.score, self.moves
            );
        } else {
            trace!("move {} changed nothing", direction);
        }
        outcome
    }

    /// Play one turn: move, then spawn a tile if the board changed.
    pub fn play<R: Rng>(&mut self, direction: Direction, rng: &mut R) -> Result<Turn, BoardError> {
        let outcome = self.shift(direction);
        let spawned = if outcome.changed {
            Some(self.spawn_tile(rng)?)
        } else {
            None
        };
        Ok(Turn {
            direction,
            changed: outcome.changed,
            score_gained: outcome.score_gained,
            spawned,
        })
    }

    /// Evaluate the current game status. Reaching `WIN_VALUE` wins even when
    /// the board is also stuck.
    pub fn status(&self) -> GameStatus {
        if self.board.highest_value() >= WIN_VALUE {
            GameStatus::Won
        } else if !self.board.can_move() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: BoardSnapshot::from(&self.board),
            score: self.score,
            moves: self.moves,
            next_id: self.next_id,
        }
    }

    /// Restore an engine from a previously saved state.
    pub fn from_state(state: &GameState) -> Result<Self, BoardError> {
        let board = Board::<N>::try_from(&state.board)?;
        let mut engine = Self::with_board(board)?;
        engine.score = state.score;
        engine.moves = state.moves;
        engine.next_id = engine.next_id.max(state.next_id);
        Ok(engine)
    }
}
