use core::fmt;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Count type used for tile counts on the board.
pub type TileCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Number of rows and columns on the board.
pub const BOARD_SIDE: Coord = 8;

/// Total number of tiles on the board.
pub const BOARD_TILES: TileCount = mult(BOARD_SIDE, BOARD_SIDE);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> TileCount {
    let a = a as TileCount;
    let b = b as TileCount;
    a.saturating_mul(b)
}

pub const fn in_bounds((row, col): Coord2) -> bool {
    row < BOARD_SIDE && col < BOARD_SIDE
}

/// Stable identifier of a tile position, displayed as `"row-col"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub Coord2);

impl TileId {
    pub const fn coords(self) -> Coord2 {
        self.0
    }
}

impl From<Coord2> for TileId {
    fn from(coords: Coord2) -> Self {
        Self(coords)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0.0, self.0.1)
    }
}

/// Iterates every board position in row-major order.
pub fn iter_coords() -> impl Iterator<Item = Coord2> {
    (0..BOARD_SIDE).flat_map(|row| (0..BOARD_SIDE).map(move |col| (row, col)))
}
