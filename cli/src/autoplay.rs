use anyhow::{Context, Result};
use rand::prelude::*;
use tileflip_core::*;

/// What the auto player did with one turn action.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Flipped {
        team: TeamId,
        coords: Coord2,
        outcome: FlipOutcome,
    },
    Passed {
        team: TeamId,
        outcome: PassOutcome,
    },
}

impl Action {
    pub fn message(&self) -> &str {
        match self {
            Self::Flipped { outcome, .. } => &outcome.message,
            Self::Passed { outcome, .. } => &outcome.message,
        }
    }
}

/// Headless stand-in for a player: flips random unflipped tiles, optionally passing once ahead.
#[derive(Clone, Debug)]
pub struct AutoPlayer {
    rng: SmallRng,
    pass_at: Option<u32>,
}

impl AutoPlayer {
    pub fn new(seed: u64, pass_at: Option<u32>) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            pass_at,
        }
    }

    pub fn step(&mut self, game: &mut Game) -> Result<Action> {
        let team = game.current_team();
        let state = game.state().team(team);

        if let Some(pass_at) = self.pass_at {
            if state.tiles_flipped_this_turn == 0 && state.score >= pass_at {
                let outcome = game.pass(team)?;
                return Ok(Action::Passed { team, outcome });
            }
        }

        let choices: Vec<Coord2> = game.unflipped(team).collect();
        let coords = *choices
            .choose(&mut self.rng)
            .with_context(|| format!("{team} has no tiles left to flip"))?;
        let outcome = game.flip(team, coords)?;
        Ok(Action::Flipped {
            team,
            coords,
            outcome,
        })
    }

    /// Plays until the game ends, reporting every action.
    pub fn play(&mut self, game: &mut Game, mut report: impl FnMut(&Game, &Action)) -> Result<usize> {
        let mut actions = 0;
        while !game.is_finished() {
            let action = self.step(game)?;
            report(game, &action);
            actions += 1;
        }
        Ok(actions)
    }
}

/// Board as a grid of tile labels, one row per line.
pub fn render_board(board: &Board) -> String {
    board
        .rows()
        .map(|row| {
            row.map(|tile| format!("{:>4}", tile.to_string()))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
