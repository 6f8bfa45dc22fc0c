use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, table: &FrequencyTable) -> Board;
}

/// How many copies of `tile` go into the pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileFrequency {
    pub tile: Tile,
    pub count: TileCount,
}

impl TileFrequency {
    pub const fn new(tile: Tile, count: TileCount) -> Self {
        Self { tile, count }
    }
}

/// Weighted tile pool, back-filled with `filler` up to [`BOARD_TILES`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    pub entries: &'static [TileFrequency],
    pub filler: Tile,
}

impl FrequencyTable {
    pub const STANDARD: Self = Self {
        entries: &[
            TileFrequency::new(Tile::points(100), 1),
            TileFrequency::new(Tile::points(50), 2),
            TileFrequency::new(Tile::points(30), 3),
            TileFrequency::new(Tile::points(20), 5),
            TileFrequency::new(Tile::points(10), 10),
            TileFrequency::new(Tile::bomb(), 3),
            TileFrequency::new(Tile::extra_life(), 2),
            TileFrequency::new(Tile::multiplier(), 1),
        ],
        filler: Tile::try_again(1),
    };

    /// Number of tiles listed explicitly, before back-filling.
    pub const fn explicit_count(&self) -> TileCount {
        let mut total: TileCount = 0;
        let mut i = 0;
        while i < self.entries.len() {
            total = total.saturating_add(self.entries[i].count);
            i += 1;
        }
        total
    }

    pub const fn filler_count(&self) -> TileCount {
        BOARD_TILES.saturating_sub(self.explicit_count())
    }

    /// Expands the table into exactly [`BOARD_TILES`] tiles, in table order.
    pub fn expand(&self) -> Vec<Tile> {
        let explicit = self.explicit_count();
        if explicit > BOARD_TILES {
            log::warn!(
                "Frequency table overflows the board, requested {} but only fits {}",
                explicit,
                BOARD_TILES
            );
        }

        let mut pool = Vec::with_capacity(BOARD_TILES.into());
        for entry in self.entries {
            for _ in 0..entry.count {
                if pool.len() == usize::from(BOARD_TILES) {
                    return pool;
                }
                pool.push(entry.tile);
            }
        }
        pool.resize(BOARD_TILES.into(), self.filler);
        pool
    }

    /// Expected multiset of tiles on any board generated from this table.
    pub fn tally(&self) -> BTreeMap<Tile, TileCount> {
        count_tiles(self.expand().iter().copied())
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

const _: () = assert!(FrequencyTable::STANDARD.explicit_count() <= BOARD_TILES);

pub(crate) fn count_tiles(tiles: impl Iterator<Item = Tile>) -> BTreeMap<Tile, TileCount> {
    let mut tally = BTreeMap::new();
    for tile in tiles {
        *tally.entry(tile).or_insert(0) += 1;
    }
    tally
}

/// Shuffles a freshly seeded standard board.
pub fn generate_board(seed: u64) -> Board {
    RandomBoardGenerator::new(seed).generate(&FrequencyTable::STANDARD)
}
