//! Replays a script of intents against a generated board.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin mines-replay -- --height 9 --width 9 --mines 10 --seed <HEX> moves.txt
//! echo "reveal 4 4" | cargo run --bin mines-replay -- --seed <HEX>
//! ```
//!
//! Every observer notification is printed as one line, followed by the final
//! status, the seed and the mine counter.

use std::{
    error::Error,
    fs,
    io::{self, Read as _},
    path::PathBuf,
    process,
};

use clap::Parser;
use mines_app::{
    input::ClickIntent,
    replay::{self, EventLine},
};
use mines_core::BoardConfig;
use mines_game::{Game, GameEvent, NoEffects};
use mines_generator::{BoardSeed, MineGenerator, PlacementPolicy};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of rows.
    #[arg(long, default_value_t = 10)]
    height: usize,

    /// Number of columns.
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Number of mines.
    #[arg(long, default_value_t = 15)]
    mines: usize,

    /// Hex seed of the board; a random one is used when absent.
    #[arg(long, value_name = "HEX")]
    seed: Option<BoardSeed>,

    /// Never place mines on the corner cells.
    #[arg(long)]
    avoid_corners: bool,

    /// Script to replay; read from stdin when absent.
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let script = match &args.script {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut script = String::new();
            io::stdin().read_to_string(&mut script)?;
            script
        }
    };
    let commands = replay::parse_script(&script)?;

    let config = BoardConfig::new(args.height, args.width, args.mines)?;
    let policy = if args.avoid_corners {
        PlacementPolicy::AvoidCorners
    } else {
        PlacementPolicy::Uniform
    };
    let seed = args.seed.unwrap_or_else(BoardSeed::random);
    let generated = MineGenerator::with_policy(policy).generate_with_seed(&config, seed)?;
    let mut game = Game::from_layout(&generated.layout, Vec::<GameEvent>::new(), NoEffects)?;
    print_events(game.observer_mut());

    for command in commands {
        log::debug!("{:?} {}", command.intent, command.pos);
        let outcome = match command.intent {
            ClickIntent::Reveal => game.reveal(command.pos),
            ClickIntent::ToggleFlag => game.toggle_flag(command.pos),
            ClickIntent::Chord => game.chord(command.pos),
        }?;
        println!("> {:?} {} ({outcome:?})", command.intent, command.pos);
        print_events(game.observer_mut());
    }

    println!("status: {:?}", game.status());
    println!("seed: {seed}");
    println!("mines: {}", game.mine_counter());
    Ok(())
}

fn print_events(events: &mut Vec<GameEvent>) {
    for event in events.drain(..) {
        println!("{}", EventLine(&event));
    }
}
