use alloc::string::String;
use core::fmt::{self, Write};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

pub const DEFAULT_TEAM_NAMES: [&str; 2] = ["Thunder Hawks", "Lightning Wolves"];

/// What a single tile did to the acting team.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipEffect {
    Points(u32),
    TryAgain(u32),
    LostLife { lives_left: u8 },
    /// Bomb took the last life, the team is out.
    OutOfLives,
    /// Bomb hit with no lives left, score wiped and the team is out.
    Eliminated,
    GainedLife { lives: u8 },
    LivesFull,
    MultiplierArmed,
}

impl fmt::Display for FlipEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FlipEffect::*;
        match *self {
            Points(points) => write!(f, "+{points} points!"),
            TryAgain(1) => f.write_str("+1 point! Try one more time!"),
            TryAgain(points) => write!(f, "+{points} points! Try one more time!"),
            LostLife { lives_left } => write!(f, "Bomb! Lost a life, {lives_left} left!"),
            OutOfLives => f.write_str("Bomb! Lost the last life, out of the game!"),
            Eliminated => f.write_str("Bomb! No lives left, score reset to 0!"),
            GainedLife { .. } => f.write_str("Extra life gained!"),
            LivesFull => f.write_str("Extra life, but lives are already full!"),
            MultiplierArmed => f.write_str("Next points will be doubled!"),
        }
    }
}

/// Annotation appended to a flip or pass message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Note {
    MustFlipMore(u8),
    MaxTriesReached,
    NoTilesLeft,
    Won(TeamId),
    GameOver,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlipOutcome {
    pub effect: FlipEffect,
    pub notes: SmallVec<[Note; 2]>,
    /// Human-readable effect followed by every note.
    pub message: String,
    /// Whether the same team flips again.
    pub continue_play: bool,
}

impl FlipOutcome {
    fn new(effect: FlipEffect, continue_play: bool) -> Self {
        let mut message = String::new();
        let _ = write!(message, "{effect}");
        Self {
            effect,
            notes: SmallVec::new(),
            message,
            continue_play,
        }
    }

    fn annotate(&mut self, note: Note, teams: &Teams) {
        self.notes.push(note);
        self.message.push(' ');
        let _ = write_note(&mut self.message, note, teams);
    }

    pub fn has_note(&self, note: Note) -> bool {
        self.notes.contains(&note)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassOutcome {
    pub message: String,
    /// Team holding the turn afterwards, `None` once the game is over.
    pub next_team: Option<TeamId>,
}

fn write_note(out: &mut String, note: Note, teams: &Teams) -> fmt::Result {
    use Note::*;
    match note {
        MustFlipMore(1) => out.write_str("Must flip 1 more tile!"),
        MustFlipMore(count) => write!(out, "Must flip {count} more tiles!"),
        MaxTriesReached => out.write_str("Maximum tries reached!"),
        NoTilesLeft => out.write_str("No tiles left to flip!"),
        Won(team) => write!(out, "{} wins!", teams[team].name),
        GameOver => out.write_str("Game over!"),
    }
}

/// Applies the tile's effect to `team`, returning what happened.
fn apply_tile(team: &mut TeamState, tile: Tile, settings: &RuleSettings) -> FlipEffect {
    match tile.kind {
        TileKind::Points | TileKind::TryAgain => {
            let points = tile.value.saturating_mul(team.multiplier);
            team.score = team.score.saturating_add(points);
            team.multiplier = 1;
            if tile.kind == TileKind::Points {
                FlipEffect::Points(points)
            } else {
                FlipEffect::TryAgain(points)
            }
        }
        TileKind::Bomb if team.lives == 0 => {
            team.score = 0;
            team.can_continue = false;
            FlipEffect::Eliminated
        }
        TileKind::Bomb if team.lives == 1 => {
            team.lives = 0;
            team.can_continue = false;
            FlipEffect::OutOfLives
        }
        TileKind::Bomb => {
            team.lives -= 1;
            FlipEffect::LostLife {
                lives_left: team.lives,
            }
        }
        TileKind::ExtraLife if team.lives >= settings.max_lives => FlipEffect::LivesFull,
        TileKind::ExtraLife => {
            team.lives += 1;
            FlipEffect::GainedLife { lives: team.lives }
        }
        TileKind::Multiplier => {
            team.multiplier = 2;
            FlipEffect::MultiplierArmed
        }
    }
}

/// Scores, lives and turn order of both teams.
///
/// Mutated in place by [`GameState::resolve_flip`] and [`GameState::pass_turn`].
/// Once `game_over` is set it stays set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub teams: Teams,
    pub current_team: TeamId,
    pub game_over: bool,
    /// Only set by a score-based win.
    pub winner: Option<TeamId>,
    pub consecutive_passes: u8,
}

impl GameState {
    pub fn new(settings: &RuleSettings) -> Self {
        let [name1, name2] = DEFAULT_TEAM_NAMES;
        Self::with_names(name1, name2, settings)
    }

    pub fn with_names(
        team1: impl Into<String>,
        team2: impl Into<String>,
        settings: &RuleSettings,
    ) -> Self {
        Self {
            teams: Teams {
                team1: TeamState::new(team1, settings.starting_lives),
                team2: TeamState::new(team2, settings.starting_lives),
            },
            current_team: TeamId::Team1,
            game_over: false,
            winner: None,
            consecutive_passes: 0,
        }
    }

    pub fn team(&self, id: TeamId) -> &TeamState {
        &self.teams[id]
    }

    /// Resolves `team` revealing `tile` at `coords`.
    ///
    /// `team` must hold the turn and must not have flipped `coords` before;
    /// [`Game::flip`] checks both.
    pub fn resolve_flip(
        &mut self,
        team: TeamId,
        coords: Coord2,
        tile: Tile,
        settings: &RuleSettings,
    ) -> FlipOutcome {
        let other = team.other();

        let acting = &mut self.teams[team];
        acting.flipped_tiles.insert(TileId(coords));
        acting.tiles_flipped_this_turn = acting.tiles_flipped_this_turn.saturating_add(1);

        let effect = apply_tile(acting, tile, settings);
        let mut outcome = FlipOutcome::new(effect, tile.kind.grants_flip());

        if acting.flipped_count() >= BOARD_TILES {
            acting.all_tiles_flipped = true;
        }

        log::debug!(
            "{} flipped {} at {}: {:?}, score {}, lives {}",
            team,
            tile,
            TileId(coords),
            effect,
            acting.score,
            acting.lives
        );

        self.consecutive_passes = 0;

        let (acting, opponent) = (&self.teams[team], &self.teams[other]);
        let instant_win = acting.score >= settings.win_condition
            || (opponent.has_passed_turn && acting.score > opponent.score);
        let both_done = acting.is_done() && opponent.is_done();

        if instant_win {
            self.end_game(Some(team));
            outcome.continue_play = false;
            outcome.annotate(Note::Won(team), &self.teams);
            return outcome;
        }

        if both_done {
            self.end_game(None);
            outcome.continue_play = false;
            outcome.annotate(Note::GameOver, &self.teams);
            return outcome;
        }

        let flipped = self.teams[team].tiles_flipped_this_turn;
        if tile.kind == TileKind::Bomb {
            outcome.continue_play = false;
        } else {
            if flipped < settings.min_tries {
                outcome.continue_play = true;
                outcome.annotate(Note::MustFlipMore(settings.min_tries - flipped), &self.teams);
            }
            if flipped >= settings.max_tries {
                outcome.continue_play = false;
                outcome.annotate(Note::MaxTriesReached, &self.teams);
            }
        }

        if outcome.continue_play && self.teams[team].all_tiles_flipped {
            outcome.continue_play = false;
            outcome.annotate(Note::NoTilesLeft, &self.teams);
        }

        if !outcome.continue_play && self.hand_off(team).is_none() {
            outcome.annotate(Note::GameOver, &self.teams);
        }

        outcome
    }

    /// Takes `team` out of the game for good and hands the turn over.
    pub fn pass_turn(&mut self, team: TeamId) -> PassOutcome {
        let passing = &mut self.teams[team];
        passing.has_passed_turn = true;
        self.consecutive_passes = self.consecutive_passes.saturating_add(1);

        let mut message = String::new();
        let _ = write!(message, "{} passes for the rest of the game.", passing.name);
        log::debug!("{} passed, {} consecutive passes", team, self.consecutive_passes);

        let next_team = if self.consecutive_passes >= 2 {
            self.end_game(None);
            None
        } else {
            self.hand_off(team)
        };
        if next_team.is_none() {
            message.push(' ');
            let _ = write_note(&mut message, Note::GameOver, &self.teams);
        }

        PassOutcome { message, next_team }
    }

    /// Picks who flips next after `team` ended its turn, or ends the game when nobody can.
    fn hand_off(&mut self, team: TeamId) -> Option<TeamId> {
        let other = team.other();
        let next = match (self.teams[team].is_eligible(), self.teams[other].is_eligible()) {
            (_, true) => other,
            (true, false) => team,
            (false, false) => {
                self.end_game(None);
                return None;
            }
        };

        if next != self.current_team {
            log::debug!("turn passes from {} to {}", self.current_team, next);
        }
        self.current_team = next;
        self.teams[next].start_turn();
        Some(next)
    }

    fn end_game(&mut self, winner: Option<TeamId>) {
        if self.game_over {
            return;
        }

        self.game_over = true;
        self.winner = winner;
        match winner {
            Some(team) => log::info!("game over, {} wins with {}", team, self.teams[team].score),
            None => log::info!(
                "game over without a winner, scores {} to {}",
                self.teams.team1.score,
                self.teams.team2.score
            ),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&RuleSettings::DEFAULT)
    }
}

/// Board, state and rules of one game, rejecting moves that break the turn contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    state: GameState,
    settings: RuleSettings,
}

impl Game {
    pub fn new(board: Board, settings: RuleSettings) -> Result<Self> {
        let settings = settings.validate()?;
        Ok(Self {
            board,
            state: GameState::new(&settings),
            settings,
        })
    }

    pub fn with_seed(seed: u64, settings: RuleSettings) -> Result<Self> {
        Self::new(generate_board(seed), settings)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &RuleSettings {
        &self.settings
    }

    pub fn current_team(&self) -> TeamId {
        self.state.current_team
    }

    pub fn is_finished(&self) -> bool {
        self.state.game_over
    }

    pub fn winner(&self) -> Option<TeamId> {
        self.state.winner
    }

    /// Team with the higher score, `None` on a tie. Display only, never a winner.
    pub fn leader(&self) -> Option<TeamId> {
        let (score1, score2) = (self.state.teams.team1.score, self.state.teams.team2.score);
        match score1.cmp(&score2) {
            core::cmp::Ordering::Greater => Some(TeamId::Team1),
            core::cmp::Ordering::Less => Some(TeamId::Team2),
            core::cmp::Ordering::Equal => None,
        }
    }

    pub fn is_flippable(&self, team: TeamId, coords: Coord2) -> bool {
        self.check_turn(team).is_ok() && in_bounds(coords) && !self.state.teams[team].has_flipped(coords)
    }

    /// Positions `team` has not revealed yet, row-major.
    pub fn unflipped(&self, team: TeamId) -> impl Iterator<Item = Coord2> + '_ {
        iter_coords().filter(move |&coords| !self.state.teams[team].has_flipped(coords))
    }

    pub fn flip(&mut self, team: TeamId, coords: Coord2) -> Result<FlipOutcome> {
        self.check_turn(team)?;
        let coords = self.board.validate_coords(coords)?;
        if self.state.teams[team].has_flipped(coords) {
            return Err(GameError::AlreadyFlipped);
        }

        let tile = self.board[coords];
        Ok(self.state.resolve_flip(team, coords, tile, &self.settings))
    }

    pub fn pass(&mut self, team: TeamId) -> Result<PassOutcome> {
        self.check_turn(team)?;
        Ok(self.state.pass_turn(team))
    }

    fn check_turn(&self, team: TeamId) -> Result<()> {
        if self.state.game_over {
            Err(GameError::AlreadyEnded)
        } else if team != self.state.current_team {
            Err(GameError::NotYourTurn)
        } else if self.state.teams[team].is_done() {
            Err(GameError::TeamFinished)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use TeamId::*;

    fn settings(min_tries: u8, max_tries: u8) -> RuleSettings {
        RuleSettings {
            min_tries,
            max_tries,
            ..Default::default()
        }
    }

    fn board(placements: &[(Coord2, Tile)]) -> Board {
        let mut tiles = vec![Tile::points(0); usize::from(BOARD_TILES)];
        for &((row, col), tile) in placements {
            tiles[usize::from(row) * usize::from(BOARD_SIDE) + usize::from(col)] = tile;
        }
        Board::from_tiles(tiles).unwrap()
    }

    #[test]
    fn initial_state_is_at_rest() {
        let state = GameState::default();

        assert_eq!(state.current_team, Team1);
        assert!(!state.game_over);
        assert_eq!(state.winner, None);
        for (_, team) in state.teams.iter() {
            assert_eq!(team.score, 0);
            assert_eq!(team.lives, 3);
            assert_eq!(team.multiplier, 1);
            assert!(team.flipped_tiles.is_empty());
            assert!(team.is_eligible());
        }
        assert_eq!(state.teams.team1.name, "Thunder Hawks");
    }

    #[test]
    fn points_use_and_reset_the_multiplier() {
        let mut state = GameState::default();
        state.teams.team1.multiplier = 2;

        let outcome = state.resolve_flip(Team1, (0, 0), Tile::points(30), &RuleSettings::DEFAULT);

        assert_eq!(state.teams.team1.score, 60);
        assert_eq!(state.teams.team1.multiplier, 1);
        assert_eq!(outcome.effect, FlipEffect::Points(60));
        assert!(outcome.message.contains("+60"));
    }

    #[test]
    fn multiplier_arms_double_and_grants_a_flip() {
        let mut state = GameState::default();

        let outcome = state.resolve_flip(Team1, (0, 0), Tile::multiplier(), &RuleSettings::DEFAULT);
        assert!(outcome.continue_play);
        assert_eq!(state.current_team, Team1);

        let outcome = state.resolve_flip(Team1, (0, 1), Tile::try_again(1), &RuleSettings::DEFAULT);
        assert_eq!(outcome.effect, FlipEffect::TryAgain(2));
        assert!(outcome.continue_play);
        assert_eq!(state.teams.team1.score, 2);
        assert_eq!(state.teams.team1.multiplier, 1);
    }

    #[test]
    fn bomb_with_lives_left_only_costs_a_life() {
        let mut state = GameState::default();
        state.teams.team1.score = 40;
        state.teams.team1.lives = 2;

        let outcome = state.resolve_flip(Team1, (2, 3), Tile::bomb(), &RuleSettings::DEFAULT);

        assert_eq!(outcome.effect, FlipEffect::LostLife { lives_left: 1 });
        assert_eq!(state.teams.team1.score, 40);
        assert!(state.teams.team1.can_continue);
        assert!(!outcome.continue_play);
        assert_eq!(state.current_team, Team2);
    }

    #[test]
    fn bomb_without_lives_resets_score_and_eliminates() {
        let mut state = GameState::default();
        state.teams.team1.score = 80;
        state.teams.team1.lives = 0;

        let outcome = state.resolve_flip(Team1, (0, 0), Tile::bomb(), &RuleSettings::DEFAULT);

        assert_eq!(outcome.effect, FlipEffect::Eliminated);
        assert_eq!(state.teams.team1.score, 0);
        assert_eq!(state.teams.team1.lives, 0);
        assert!(!state.teams.team1.can_continue);
        assert!(!state.game_over);
        assert_eq!(state.current_team, Team2);
    }

    #[test]
    fn losing_the_last_life_hands_the_turn_over() {
        let mut state = GameState::default();
        state.teams.team1.score = 70;
        state.teams.team1.lives = 1;

        let outcome = state.resolve_flip(Team1, (1, 1), Tile::bomb(), &settings(3, 5));

        assert_eq!(outcome.effect, FlipEffect::OutOfLives);
        assert_eq!(state.teams.team1.lives, 0);
        assert_eq!(state.teams.team1.score, 70);
        assert!(!state.teams.team1.can_continue);
        assert!(!outcome.continue_play);
        assert!(!state.game_over);
        assert_eq!(state.current_team, Team2);
    }

    #[test]
    fn elimination_with_opponent_done_ends_without_winner() {
        let mut state = GameState::default();
        state.teams.team1.lives = 1;
        state.teams.team2.can_continue = false;

        let outcome = state.resolve_flip(Team1, (0, 0), Tile::bomb(), &RuleSettings::DEFAULT);

        assert_eq!(state.teams.team1.lives, 0);
        assert!(!state.teams.team1.can_continue);
        assert!(state.game_over);
        assert_eq!(state.winner, None);
        assert!(!outcome.continue_play);
        assert!(outcome.has_note(Note::GameOver));
    }

    #[test]
    fn extra_life_is_capped() {
        let mut state = GameState::default();

        let outcome = state.resolve_flip(Team1, (0, 0), Tile::extra_life(), &RuleSettings::DEFAULT);
        assert_eq!(outcome.effect, FlipEffect::GainedLife { lives: 4 });
        assert!(outcome.continue_play);

        let outcome = state.resolve_flip(Team1, (0, 1), Tile::extra_life(), &RuleSettings::DEFAULT);
        assert_eq!(outcome.effect, FlipEffect::LivesFull);
        assert_eq!(state.teams.team1.lives, 4);
    }

    #[test]
    fn reaching_win_condition_wins_mid_turn() {
        let mut state = GameState::default();
        state.teams.team1.score = 495;

        let outcome = state.resolve_flip(Team1, (4, 4), Tile::points(10), &settings(3, 5));

        assert_eq!(state.teams.team1.score, 505);
        assert!(state.game_over);
        assert_eq!(state.winner, Some(Team1));
        assert!(!outcome.continue_play);
        assert_eq!(outcome.notes.as_slice(), &[Note::Won(Team1)]);
        assert!(outcome.message.ends_with("Thunder Hawks wins!"));
    }

    #[test]
    fn surpassing_a_passed_team_wins() {
        let mut state = GameState::default();
        state.teams.team1.score = 45;
        state.teams.team2.score = 50;
        state.teams.team2.has_passed_turn = true;

        let outcome = state.resolve_flip(Team1, (0, 0), Tile::points(10), &RuleSettings::DEFAULT);

        assert!(state.game_over);
        assert_eq!(state.winner, Some(Team1));
        assert!(outcome.has_note(Note::Won(Team1)));
    }

    #[test]
    fn tying_a_passed_team_keeps_the_turn() {
        let mut state = GameState::default();
        state.teams.team1.score = 40;
        state.teams.team2.score = 50;
        state.teams.team2.has_passed_turn = true;
        state.teams.team1.tiles_flipped_this_turn = 2;

        let outcome = state.resolve_flip(Team1, (0, 0), Tile::points(10), &RuleSettings::DEFAULT);

        assert!(!state.game_over);
        assert!(!outcome.continue_play);
        assert_eq!(state.current_team, Team1);
        assert_eq!(state.teams.team1.tiles_flipped_this_turn, 0);
    }

    #[test]
    fn below_min_tries_forces_another_flip() {
        let mut state = GameState::default();

        let outcome = state.resolve_flip(Team1, (0, 0), Tile::points(20), &settings(2, 3));

        assert!(outcome.continue_play);
        assert_eq!(outcome.notes.as_slice(), &[Note::MustFlipMore(1)]);
        assert_eq!(outcome.message, "+20 points! Must flip 1 more tile!");
        assert_eq!(state.current_team, Team1);
    }

    #[test]
    fn max_tries_ends_the_turn() {
        let mut state = GameState::default();
        let rules = settings(1, 3);

        for col in 0..2 {
            let outcome = state.resolve_flip(Team1, (0, col), Tile::try_again(1), &rules);
            assert!(outcome.continue_play);
        }
        let outcome = state.resolve_flip(Team1, (0, 2), Tile::try_again(1), &rules);

        assert!(!outcome.continue_play);
        assert!(outcome.has_note(Note::MaxTriesReached));
        assert_eq!(state.current_team, Team2);
        assert_eq!(state.teams.team2.tiles_flipped_this_turn, 0);
    }

    #[test]
    fn bomb_ends_the_turn_despite_min_tries() {
        let mut state = GameState::default();

        let outcome = state.resolve_flip(Team1, (0, 0), Tile::bomb(), &settings(3, 5));

        assert!(!outcome.continue_play);
        assert!(outcome.notes.is_empty());
        assert_eq!(state.current_team, Team2);
    }

    #[test]
    fn flip_resets_consecutive_passes() {
        let mut state = GameState::default();
        state.consecutive_passes = 1;

        state.resolve_flip(Team1, (0, 0), Tile::points(10), &RuleSettings::DEFAULT);

        assert_eq!(state.consecutive_passes, 0);
    }

    #[test]
    fn ending_flip_still_resets_consecutive_passes() {
        let mut state = GameState::default();
        state.teams.team2.has_passed_turn = true;
        state.consecutive_passes = 1;
        state.teams.team1.lives = 1;

        state.resolve_flip(Team1, (0, 0), Tile::bomb(), &RuleSettings::DEFAULT);

        assert!(state.game_over);
        assert_eq!(state.consecutive_passes, 0);
    }

    #[test]
    fn jackpot_on_fresh_state_scores_and_passes_turn() {
        let mut game = Game::new(board(&[((3, 3), Tile::points(100))]), RuleSettings::DEFAULT).unwrap();

        let outcome = game.flip(Team1, (3, 3)).unwrap();

        assert_eq!(game.state().teams.team1.score, 100);
        assert!(outcome.message.contains("+100"));
        assert!(!outcome.continue_play);
        assert_eq!(game.current_team(), Team2);
    }

    #[test]
    fn both_teams_flipping_everything_ends_the_game() {
        let mut game = Game::new(board(&[]), RuleSettings::DEFAULT).unwrap();
        let coords: Vec<_> = iter_coords().collect();

        for (i, &pos) in coords.iter().enumerate() {
            game.flip(Team1, pos).unwrap();
            if i + 1 == coords.len() {
                assert!(game.state().teams.team1.all_tiles_flipped);
                assert!(!game.is_finished());
            }
            game.flip(Team2, pos).unwrap();
        }

        assert!(game.state().teams.team2.all_tiles_flipped);
        assert!(game.is_finished());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn granted_flip_on_the_last_tile_is_cancelled() {
        let mut game = Game::new(board(&[((7, 7), Tile::try_again(0))]), RuleSettings::DEFAULT).unwrap();
        let coords: Vec<_> = iter_coords().collect();
        let (&last, rest) = coords.split_last().unwrap();

        for &pos in rest {
            game.flip(Team1, pos).unwrap();
            game.flip(Team2, pos).unwrap();
        }
        let outcome = game.flip(Team1, last).unwrap();

        assert_eq!(outcome.effect, FlipEffect::TryAgain(0));
        assert!(outcome.has_note(Note::NoTilesLeft));
        assert!(!outcome.continue_play);
        assert!(game.state().teams.team1.all_tiles_flipped);
        assert!(!game.is_finished());
        assert_eq!(game.current_team(), Team2);
    }

    #[test]
    fn flip_rejects_contract_violations() {
        let mut game = Game::new(board(&[]), RuleSettings::DEFAULT).unwrap();

        assert_eq!(game.flip(Team2, (0, 0)), Err(GameError::NotYourTurn));
        assert_eq!(game.flip(Team1, (8, 0)), Err(GameError::InvalidCoords));

        game.flip(Team1, (0, 0)).unwrap();
        game.flip(Team2, (0, 0)).unwrap();

        assert_eq!(game.flip(Team1, (0, 0)), Err(GameError::AlreadyFlipped));
        assert!(!game.is_flippable(Team1, (0, 0)));
        assert!(game.is_flippable(Team1, (0, 1)));
        assert_eq!(game.unflipped(Team1).count(), 63);
    }

    #[test]
    fn passing_hands_over_then_ends_the_game() {
        let mut game = Game::new(board(&[]), RuleSettings::DEFAULT).unwrap();

        let outcome = game.pass(Team1).unwrap();
        assert_eq!(outcome.next_team, Some(Team2));
        assert_eq!(game.state().consecutive_passes, 1);
        assert!(game.state().teams.team1.has_passed_turn);

        let outcome = game.pass(Team2).unwrap();
        assert_eq!(outcome.next_team, None);
        assert!(outcome.message.ends_with("Game over!"));
        assert!(game.is_finished());
        assert_eq!(game.winner(), None);

        assert_eq!(game.flip(Team2, (0, 0)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn remaining_team_keeps_playing_after_a_pass() {
        let mut game = Game::new(board(&[((0, 1), Tile::points(10))]), RuleSettings::DEFAULT).unwrap();
        game.flip(Team1, (0, 1)).unwrap();
        game.pass(Team2).unwrap();

        assert_eq!(game.current_team(), Team1);
        assert_eq!(game.state().consecutive_passes, 1);
        assert_eq!(game.leader(), Some(Team1));

        // team1 already leads the passed team, so any flip wins
        let outcome = game.flip(Team1, (0, 0)).unwrap();
        assert!(outcome.has_note(Note::Won(Team1)));
        assert_eq!(game.winner(), Some(Team1));
    }

    #[test]
    fn game_rejects_invalid_settings() {
        assert!(matches!(
            Game::new(board(&[]), settings(0, 3)),
            Err(GameError::InvalidSettings(_))
        ));
    }

    #[test]
    fn seeded_games_always_terminate() {
        for seed in 0..16 {
            let mut game = Game::with_seed(seed, RuleSettings::DEFAULT).unwrap();
            let mut moves = 0;

            while !game.is_finished() {
                let team = game.current_team();
                let coords = game.unflipped(team).next().unwrap();
                game.flip(team, coords).unwrap();
                moves += 1;
                assert!(moves <= 2 * BOARD_TILES);
            }

            if let Some(winner) = game.winner() {
                assert!(game.state().teams[winner].score >= game.settings().win_condition);
            }
        }
    }
}
