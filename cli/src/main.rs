use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tileflip_core::*;

mod autoplay;
mod settings;

use autoplay::{Action, AutoPlayer};

#[derive(Parser, Debug)]
#[command(version, about = "Plays a seeded flip-the-tile game between two automatic teams", long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with rule settings
    #[arg(long)]
    settings: Option<PathBuf>,

    #[arg(long)]
    min_tries: Option<u8>,

    #[arg(long)]
    max_tries: Option<u8>,

    /// Score that wins instantly
    #[arg(long)]
    win_condition: Option<u32>,

    /// Teams pass for good at the start of a turn once they have this score
    #[arg(long)]
    pass_at: Option<u32>,

    /// Print the final game state as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = settings::resolve(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}, settings: {settings:?}");

    let mut game = Game::with_seed(seed, settings)?;
    let mut player = AutoPlayer::new(seed, args.pass_at);
    let quiet = args.json;

    let actions = player.play(&mut game, |game, action| {
        if quiet {
            return;
        }
        match action {
            Action::Flipped { team, coords, .. } => println!(
                "[{}] {}: {}",
                game.state().team(*team).name,
                TileId(*coords),
                action.message()
            ),
            Action::Passed { .. } => println!("{}", action.message()),
        }
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(game.state())?);
        return Ok(());
    }

    println!();
    println!("{}", autoplay::render_board(game.board()));
    println!();
    for (_, team) in game.state().teams.iter() {
        println!("{}: {} points, {} lives, {} tiles", team.name, team.score, team.lives, team.flipped_count());
    }
    match (game.winner(), game.leader()) {
        (Some(winner), _) => println!("{} wins after {actions} moves", game.state().team(winner).name),
        (None, Some(leader)) => println!(
            "No winner after {actions} moves, {} finished ahead",
            game.state().team(leader).name
        ),
        (None, None) => println!("No winner after {actions} moves, scores are tied"),
    }
    println!("seed: {seed}");

    Ok(())
}
