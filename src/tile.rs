//! Tile slots.

/// Identity of a physical tile. `0` marks an empty slot.
pub type TileId = u32;

/// One slot of a lane or board.
///
/// An empty slot is always [`Tile::EMPTY`]: inactive, zero value, id `0`
/// and not merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    pub id: TileId,
    pub is_active: bool,
    pub value: u64,
    /// Set while a move is in progress on a slot that absorbed a neighbour.
    pub already_merged: bool,
}

impl Tile {
    pub const EMPTY: Tile = Tile {
        id: 0,
        is_active: false,
        value: 0,
        already_merged: false,
    };

    /// An active tile at rest.
    pub const fn new(id: TileId, value: u64) -> Self {
        Tile {
            id,
            is_active: true,
            value,
            already_merged: false,
        }
    }

    /// Value of the slot, `None` when empty.
    pub fn current_value(&self) -> Option<u64> {
        self.is_active.then_some(self.value)
    }

    /// Whether the fields agree with each other for a tile at rest.
    pub fn is_well_formed(&self) -> bool {
        if self.already_merged {
            return false;
        }
        if self.is_active {
            self.id != 0 && self.value != 0
        } else {
            *self == Tile::EMPTY
        }
    }

    /// Value this slot takes on absorbing `other` in the current move, or
    /// `None` when they cannot merge. Tiles whose doubled value would not fit
    /// in a `u64` never merge.
    pub(crate) fn absorbed(&self, other: &Tile) -> Option<u64> {
        let eligible = self.is_active
            && other.is_active
            && !self.already_merged
            && !other.already_merged
            && self.value == other.value;
        if eligible {
            self.value.checked_mul(2)
        } else {
            None
        }
    }
}
