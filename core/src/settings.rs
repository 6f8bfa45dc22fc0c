use serde::{Deserialize, Serialize};

use crate::*;

/// Tunable rules consumed by the flip resolver.
///
/// Missing fields fall back to [`RuleSettings::default`] when deserialized.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    /// Flips a team must make before its turn may end.
    pub min_tries: u8,
    /// Hard cap on flips per turn.
    pub max_tries: u8,
    /// Score that wins the game instantly.
    pub win_condition: u32,
    pub starting_lives: u8,
    /// Extra lives beyond this are discarded.
    pub max_lives: u8,
}

impl RuleSettings {
    pub const DEFAULT: Self = Self {
        min_tries: 1,
        max_tries: 3,
        win_condition: 501,
        starting_lives: 3,
        max_lives: 4,
    };

    pub fn validate(self) -> Result<Self> {
        if self.min_tries == 0 {
            return Err(GameError::InvalidSettings("min_tries must be at least 1"));
        }
        if self.max_tries < self.min_tries {
            return Err(GameError::InvalidSettings(
                "max_tries must not be below min_tries",
            ));
        }
        if self.starting_lives > self.max_lives {
            return Err(GameError::InvalidSettings(
                "starting_lives must not exceed max_lives",
            ));
        }
        Ok(self)
    }
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}
