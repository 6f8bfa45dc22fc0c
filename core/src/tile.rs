use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Points,
    Bomb,
    ExtraLife,
    Multiplier,
    TryAgain,
}

impl TileKind {
    /// Whether flipping this kind grants another flip by default.
    pub const fn grants_flip(self) -> bool {
        matches!(self, Self::ExtraLife | Self::Multiplier | Self::TryAgain)
    }

    /// Whether the tile's value is added to the score.
    pub const fn scores(self) -> bool {
        matches!(self, Self::Points | Self::TryAgain)
    }
}

/// Hidden effect of a single board cell.
///
/// `value` is the point amount for [`TileKind::Points`] and
/// [`TileKind::TryAgain`], and `0` for every other kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub value: u32,
}

impl Tile {
    pub const fn points(value: u32) -> Self {
        Self {
            kind: TileKind::Points,
            value,
        }
    }

    pub const fn try_again(value: u32) -> Self {
        Self {
            kind: TileKind::TryAgain,
            value,
        }
    }

    pub const fn bomb() -> Self {
        Self {
            kind: TileKind::Bomb,
            value: 0,
        }
    }

    pub const fn extra_life() -> Self {
        Self {
            kind: TileKind::ExtraLife,
            value: 0,
        }
    }

    pub const fn multiplier() -> Self {
        Self {
            kind: TileKind::Multiplier,
            value: 0,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TileKind::Points => write!(f, "{}", self.value),
            TileKind::TryAgain => write!(f, "+{}", self.value),
            TileKind::Bomb => f.write_str("B"),
            TileKind::ExtraLife => f.write_str("L"),
            TileKind::Multiplier => f.write_str("x2"),
        }
    }
}
