use alloc::collections::BTreeSet;
use alloc::string::String;
use core::fmt;
use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TeamId {
    Team1,
    Team2,
}

impl TeamId {
    pub const ALL: [Self; 2] = [Self::Team1, Self::Team2];

    pub const fn other(self) -> Self {
        match self {
            Self::Team1 => Self::Team2,
            Self::Team2 => Self::Team1,
        }
    }
}

impl Default for TeamId {
    fn default() -> Self {
        Self::Team1
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Team1 => f.write_str("team1"),
            Self::Team2 => f.write_str("team2"),
        }
    }
}

/// Per-team score, lives and flip bookkeeping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamState {
    pub name: String,
    pub score: u32,
    pub lives: u8,
    /// Factor applied to the next scoring tile, back to 1 afterwards.
    pub multiplier: u32,
    pub flipped_tiles: BTreeSet<TileId>,
    pub tiles_flipped_this_turn: u8,
    /// Cleared when a bomb hits with no lives left.
    pub can_continue: bool,
    pub all_tiles_flipped: bool,
    pub has_passed_turn: bool,
}

impl TeamState {
    pub fn new(name: impl Into<String>, lives: u8) -> Self {
        Self {
            name: name.into(),
            score: 0,
            lives,
            multiplier: 1,
            flipped_tiles: BTreeSet::new(),
            tiles_flipped_this_turn: 0,
            can_continue: true,
            all_tiles_flipped: false,
            has_passed_turn: false,
        }
    }

    pub fn has_flipped(&self, coords: Coord2) -> bool {
        self.flipped_tiles.contains(&TileId(coords))
    }

    pub fn flipped_count(&self) -> TileCount {
        // at most 64 entries
        self.flipped_tiles.len() as TileCount
    }

    /// Out of lives, passed for good, or nothing left to flip.
    pub fn is_done(&self) -> bool {
        !self.can_continue || self.has_passed_turn || self.all_tiles_flipped
    }

    pub fn is_eligible(&self) -> bool {
        !self.is_done()
    }

    pub(crate) fn start_turn(&mut self) {
        self.tiles_flipped_this_turn = 0;
    }
}

/// Exactly two teams, indexed by [`TeamId`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Teams {
    pub team1: TeamState,
    pub team2: TeamState,
}

impl Teams {
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &TeamState)> {
        TeamId::ALL.into_iter().map(move |id| (id, &self[id]))
    }
}

impl Index<TeamId> for Teams {
    type Output = TeamState;

    fn index(&self, id: TeamId) -> &Self::Output {
        match id {
            TeamId::Team1 => &self.team1,
            TeamId::Team2 => &self.team2,
        }
    }
}

impl IndexMut<TeamId> for Teams {
    fn index_mut(&mut self, id: TeamId) -> &mut Self::Output {
        match id {
            TeamId::Team1 => &mut self.team1,
            TeamId::Team2 => &mut self.team2,
        }
    }
}
