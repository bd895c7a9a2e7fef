//! Move-selection policies used to drive simulated games.

use rand::Rng;

use crate::{
    board::Board,
    common::BoardError,
    direction::Direction,
    game::{GameEngine, GameStatus},
};

/// Interface implemented by automated players.
pub trait Policy {
    /// Choose the next direction, or `None` when no direction changes the
    /// board.
    fn select_move<const N: usize, R: Rng>(
        &mut self,
        board: &Board<N>,
        rng: &mut R,
    ) -> Option<Direction>;
}

/// Picks uniformly among the directions that change the board.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPolicy;

impl RandomPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for RandomPolicy {
    fn select_move<const N: usize, R: Rng>(
        &mut self,
        board: &Board<N>,
        rng: &mut R,
    ) -> Option<Direction> {
        let mut legal = [Direction::Up; 4];
        let mut count = 0;
        for d in Direction::ALL {
            if board.apply(d).changed {
                legal[count] = d;
                count += 1;
            }
        }
        if count == 0 {
            return None;
        }
        Some(legal[rng.random_range(0..count)])
    }
}

/// One-ply lookahead: most points, then most empty cells. Ties go to the
/// earlier entry of [`Direction::ALL`].
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for GreedyPolicy {
    fn select_move<const N: usize, R: Rng>(
        &mut self,
        board: &Board<N>,
        _rng: &mut R,
    ) -> Option<Direction> {
        let mut best: Option<(Direction, (u64, usize))> = None;
        for d in Direction::ALL {
            let outcome = board.apply(d);
            if !outcome.changed {
                continue;
            }
            let key = (
                outcome.score_gained,
                N * N - outcome.board.active_count(),
            );
            if best.map_or(true, |(_, best_key)| key > best_key) {
                best = Some((d, key));
            }
        }
        best.map(|(d, _)| d)
    }
}

/// Let `policy` play `engine` until the game is decided, the policy finds no
/// move, or `max_moves` committed moves have been made.
pub fn play_out<const N: usize, P: Policy, R: Rng>(
    engine: &mut GameEngine<N>,
    policy: &mut P,
    rng: &mut R,
    max_moves: Option<usize>,
) -> Result<GameStatus, BoardError> {
    while engine.status() == GameStatus::InProgress {
        if max_moves.is_some_and(|max| engine.moves() >= max) {
            break;
        }
        let Some(direction) = policy.select_move(engine.board(), rng) else {
            break;
        };
        engine.play(direction, rng)?;
    }
    Ok(engine.status())
}
