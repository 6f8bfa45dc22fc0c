#![no_std]

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use settings::*;
pub use team::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod settings;
mod team;
mod tile;
mod types;

/// Immutable 8x8 grid of tiles, addressed by `(row, col)`.
///
/// Serialized as a flat row-major list, checked on the way back in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Board {
    tiles: Array2<Tile>,
}

impl Board {
    /// Builds a board from exactly [`BOARD_TILES`] tiles laid out row-major.
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self> {
        if tiles.len() != usize::from(BOARD_TILES) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self::from_row_major(tiles))
    }

    pub(crate) fn from_row_major(tiles: Vec<Tile>) -> Self {
        let side = usize::from(BOARD_SIDE);
        let tiles = Array2::from_shape_vec((side, side), tiles).expect("pool should fill the board");
        Self { tiles }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Tile)> + '_ {
        iter_coords().map(|coords| (coords, self[coords]))
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Tile> + '_> + '_ {
        self.tiles.rows().into_iter().map(|row| row.into_iter().copied())
    }

    /// Multiset of tiles on the board.
    pub fn tally(&self) -> BTreeMap<Tile, TileCount> {
        generator::count_tiles(self.tiles.iter().copied())
    }
}

impl TryFrom<Vec<Tile>> for Board {
    type Error = GameError;

    fn try_from(tiles: Vec<Tile>) -> Result<Self> {
        Self::from_tiles(tiles)
    }
}

impl From<Board> for Vec<Tile> {
    fn from(board: Board) -> Self {
        board.tiles.iter().copied().collect()
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}
