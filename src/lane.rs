//! Lane merge engine: slide and combine one row or column.
//!
//! A lane is `[Tile; N]` oriented so that index 0 is the edge the tiles
//! travel towards. The scan compares each slot (`current`) with its
//! neighbour one step farther from the edge (`next`):
//!
//! - an empty `current` pulls an active `next` into its place;
//! - an active `current` absorbs an equal `next` when neither has merged
//!   during this move, doubling its value. A pair whose doubled value
//!   would overflow `u64` stays apart.
//!
//! After any change the scan resumes one position before the changed slot,
//! which yields the same lane as restarting from the edge every time. Once a
//! full pass makes no change the per-move merge flags are cleared.

use crate::common::BoardError;
use crate::tile::Tile;

/// Slide and merge `lane` towards index 0.
pub fn merge_lane<const N: usize>(lane: [Tile; N]) -> [Tile; N] {
    merge_lane_scored(lane).0
}

/// Like [`merge_lane`], also returning the sum of the values created by
/// merges.
pub fn merge_lane_scored<const N: usize>(mut lane: [Tile; N]) -> ([Tile; N], u64) {
    let mut score = 0u64;
    let mut i = 0;
    while i + 1 < N {
        match step(&mut lane, i) {
            Step::Idle => i += 1,
            Step::Slid => i = i.saturating_sub(1),
            Step::Merged(value) => {
                score = score.saturating_add(value);
                i = i.saturating_sub(1);
            }
        }
    }
    for tile in lane.iter_mut() {
        tile.already_merged = false;
    }
    (lane, score)
}

/// Copy a dynamically sized lane into a fixed one.
pub fn lane_from_slice<const N: usize>(slots: &[Tile]) -> Result<[Tile; N], BoardError> {
    <[Tile; N]>::try_from(slots).map_err(|_| BoardError::LaneLength {
        expected: N,
        found: slots.len(),
    })
}

enum Step {
    Idle,
    Slid,
    Merged(u64),
}

fn step<const N: usize>(lane: &mut [Tile; N], i: usize) -> Step {
    let (current, next) = (lane[i], lane[i + 1]);
    if !current.is_active {
        if next.is_active {
            lane[i] = next;
            lane[i + 1] = Tile::EMPTY;
            return Step::Slid;
        }
        return Step::Idle;
    }
    if let Some(value) = current.absorbed(&next) {
        lane[i].value = value;
        lane[i].already_merged = true;
        lane[i + 1] = Tile::EMPTY;
        return Step::Merged(value);
    }
    Step::Idle
}
