#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
pub mod direction;
mod game;
pub mod lane;
#[cfg(feature = "std")]
mod logging;
pub mod policy;
pub mod snapshot;
mod tile;

pub use bitboard::{BitBoard, BitBoardError, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use direction::{Direction, Orientation, Traversal};
pub use game::*;
pub use lane::{lane_from_slice, merge_lane, merge_lane_scored};
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, short_target, LOG_ENV};
pub use policy::{play_out, GreedyPolicy, Policy, RandomPolicy};
pub use snapshot::{BoardSnapshot, TileRecord};
pub use tile::*;
