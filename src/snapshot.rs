//! External tile records: the representation boards are handed over in.
//!
//! A snapshot lists one record per cell in row-major order. Importing a
//! snapshot validates it completely before any board is produced.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::board::{Board, Mask};
use crate::common::BoardError;
use crate::tile::{Tile, TileId};

/// One cell of a board as seen from outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct TileRecord {
    pub id: TileId,
    /// `[x, y]`, with `x` the column and `y` the row.
    pub coordinates: [usize; 2],
    pub is_active: bool,
    pub current_value: u64,
    pub already_merged: bool,
}

/// A whole board as a flat list of tile records.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub size: usize,
    pub tiles: Vec<TileRecord>,
}

impl TileRecord {
    fn from_tile(tile: &Tile, x: usize, y: usize) -> Self {
        TileRecord {
            id: tile.id,
            coordinates: [x, y],
            is_active: tile.is_active,
            current_value: tile.value,
            already_merged: tile.already_merged,
        }
    }

    fn to_tile(self) -> Tile {
        Tile {
            id: self.id,
            is_active: self.is_active,
            value: self.current_value,
            already_merged: self.already_merged,
        }
    }
}

impl BoardSnapshot {
    /// Coordinates of every empty cell, in record order.
    pub fn empty_coordinates(&self) -> Vec<[usize; 2]> {
        self.tiles
            .iter()
            .filter(|t| !t.is_active)
            .map(|t| t.coordinates)
            .collect()
    }

    /// Record of the active tile with `id`.
    pub fn find(&self, id: TileId) -> Option<&TileRecord> {
        self.tiles.iter().find(|t| t.is_active && t.id == id)
    }

    /// Ids of the active tiles, ascending.
    pub fn active_ids(&self) -> Vec<TileId> {
        let mut ids: Vec<TileId> = self
            .tiles
            .iter()
            .filter(|t| t.is_active)
            .map(|t| t.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Put records in row-major order.
    pub fn sort(&mut self) {
        self.tiles
            .sort_by_key(|t| (t.coordinates[1], t.coordinates[0]));
    }

    /// Put active records first, ordered by id, then empty cells in
    /// row-major order. Empty cells all carry id `0`, so they have no id
    /// order of their own.
    pub fn sort_by_id(&mut self) {
        self.tiles.sort_by_key(|t| {
            let id = if t.is_active { t.id } else { 0 };
            (!t.is_active, id, t.coordinates[1], t.coordinates[0])
        });
    }
}

#[cfg(feature = "std")]
impl BoardSnapshot {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl<const N: usize> From<&Board<N>> for BoardSnapshot {
    fn from(board: &Board<N>) -> Self {
        let tiles = board
            .rows()
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(x, tile)| TileRecord::from_tile(tile, x, y))
            })
            .collect();
        BoardSnapshot { size: N, tiles }
    }
}

impl<const N: usize> TryFrom<&BoardSnapshot> for Board<N> {
    type Error = BoardError;

    fn try_from(snapshot: &BoardSnapshot) -> Result<Self, Self::Error> {
        let mut board = Board::<N>::try_new()?;
        if snapshot.size != N {
            return Err(BoardError::BoardSize {
                expected: N,
                found: snapshot.size,
            });
        }
        if snapshot.tiles.len() != N * N {
            return Err(BoardError::TileCount {
                expected: N * N,
                found: snapshot.tiles.len(),
            });
        }

        let mut seen = Mask::<N>::try_new()?;
        let mut ids = BTreeSet::new();
        for record in &snapshot.tiles {
            let [x, y] = record.coordinates;
            if x >= N || y >= N {
                return Err(BoardError::OutOfBounds { x, y });
            }
            if seen.get(x, y)? {
                return Err(BoardError::DuplicateCoordinates { x, y });
            }
            seen.set(x, y)?;

            let tile = record.to_tile();
            if !tile.is_well_formed() {
                return Err(BoardError::MalformedTile { x, y });
            }
            if tile.is_active && !ids.insert(tile.id) {
                return Err(BoardError::DuplicateId(tile.id));
            }
            board.set_tile(x, y, tile)?;
        }
        Ok(board)
    }
}
