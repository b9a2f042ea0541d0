use serde::{Deserialize, Serialize};

use crate::grid::{TileId, TOTAL};
use crate::rng::rand_index;

const SHUFFLE_SALT: u32 = 0xC0DE;

/// Mapping from grid position to the tile identity occupying it. Always a
/// permutation of `0..TOTAL`: swaps exchange two slots and nothing else can
/// touch the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    slots: [TileId; TOTAL],
}

impl Placement {
    pub fn solved() -> Self {
        let mut slots = [0; TOTAL];
        for (position, slot) in slots.iter_mut().enumerate() {
            *slot = position;
        }
        Self { slots }
    }

    /// Fisher-Yates backward walk over the solved layout. A degenerate walk
    /// that lands on the identity permutation gets positions 0 and 1
    /// exchanged: a fresh round never starts solved.
    pub fn shuffled(seed: u32) -> Self {
        let mut placement = Self::solved();
        for i in (1..placement.slots.len()).rev() {
            let salt = SHUFFLE_SALT + i as u32;
            let j = rand_index(seed, salt, i + 1);
            placement.slots.swap(i, j);
        }
        if placement.is_solved() {
            placement.slots.swap(0, 1);
        }
        placement
    }

    pub fn tile_at(&self, position: usize) -> Option<TileId> {
        self.slots.get(position).copied()
    }

    /// Exchanges the tiles at the two positions. Returns false (leaving the
    /// layout untouched) when either position is out of range.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= TOTAL || b >= TOTAL {
            return false;
        }
        self.slots.swap(a, b);
        true
    }

    pub fn is_solved(&self) -> bool {
        self.slots
            .iter()
            .enumerate()
            .all(|(position, id)| position == *id)
    }

    pub fn tiles(&self) -> &[TileId] {
        &self.slots
    }
}
