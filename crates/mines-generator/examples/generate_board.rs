//! Example demonstrating mine layout generation.
//!
//! This example shows how to:
//! - Create a `MineGenerator` with a placement policy
//! - Generate a random or seeded layout
//! - Display the layout and its seed
//! - Measure how open generated boards are
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Choose the board and reproduce a layout from its seed:
//!
//! ```sh
//! cargo run --example generate_board -- --height 16 --width 30 --mines 99 --seed <HEX>
//! ```
//!
//! Sample many layouts in parallel and report the average number of safe cells
//! without neighboring mines (the cells that start a flood-fill):
//!
//! ```sh
//! cargo run --example generate_board -- --samples 10000
//! ```

use std::process;

use clap::Parser;
use mines_core::{BoardConfig, MineLayout, Position};
use mines_generator::{BoardSeed, MineGenerator, PlacementPolicy};
use rayon::prelude::*;

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

    /// Hex seed of the layout to generate.
    #[arg(long, value_name = "HEX")]
    seed: Option<BoardSeed>,

    /// Never place mines on the corner cells.
    #[arg(long)]
    avoid_corners: bool,

    /// Number of layouts to sample for statistics.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let config = match BoardConfig::new(args.height, args.width, args.mines) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid board: {err}");
            process::exit(1);
        }
    };
    let policy = if args.avoid_corners {
        PlacementPolicy::AvoidCorners
    } else {
        PlacementPolicy::Uniform
    };
    let generator = MineGenerator::with_policy(policy);

    if let Some(samples) = args.samples {
        if samples == 0 {
            eprintln!("--samples must be at least 1.");
            process::exit(1);
        }
        let total = (0..samples)
            .into_par_iter()
            .map(|_| generator.generate(&config).map(|g| zero_cells(&g.layout)))
            .try_reduce(|| 0, |a, b| Ok(a + b));
        match total {
            Ok(total) => {
                #[expect(clippy::cast_precision_loss)]
                let average = total as f64 / samples as f64;
                println!("Samples: {samples}");
                println!("Average zero cells: {average:.2}");
            }
            Err(err) => {
                eprintln!("Generation failed: {err}");
                process::exit(1);
            }
        }
        return;
    }

    let seed = args.seed.unwrap_or_else(BoardSeed::random);
    let generated = match generator.generate_with_seed(&config, seed) {
        Ok(generated) => generated,
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Layout:");
    print_layout(&generated.layout);
    println!();
    println!("Zero cells: {}", zero_cells(&generated.layout));
}

fn zero_cells(layout: &MineLayout) -> usize {
    layout
        .size()
        .positions()
        .filter(|&pos| !layout.is_mine(pos) && layout.neighbor_mines(pos) == 0)
        .count()
}

fn print_layout(layout: &MineLayout) {
    let size = layout.size();
    for row in 0..size.height() {
        let line: String = (0..size.width())
            .map(|col| {
                let pos = Position::new(row, col);
                if layout.is_mine(pos) {
                    '*'
                } else {
                    match layout.neighbor_mines(pos) {
                        0 => '.',
                        n => char::from(b'0' + n),
                    }
                }
            })
            .collect();
        println!("  {line}");
    }
}
