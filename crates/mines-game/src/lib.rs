//! Minesweeper game engine.
//!
//! This crate owns the board state and the rules of play:
//!
//! - [`Board`]: the grid of [`Cell`]s with reveal (including flood-fill),
//!   flag toggling, chording and win/loss detection.
//! - [`Game`]: a controller that owns the current board and forwards intents to
//!   it, restarts games, drives the [`GameClock`] and calls the
//!   [`GameEffects`] collaborator on terminal transitions.
//! - [`GameObserver`]: the callback contract through which a presentation layer
//!   learns about every changed cell, the mine counter and the end of the game.
//!
//! The engine is addressed exclusively by [`Position`]; whatever widgets a
//! front end uses are mapped to coordinates before calling in.
//!
//! # Examples
//!
//! ```
//! use mines_core::{BoardSize, MineLayout, Position};
//! use mines_game::{Board, CellDisplay, GameEvent, GameOutcome};
//!
//! // . *
//! let size = BoardSize::new(1, 2)?;
//! let layout = MineLayout::from_positions(size, [Position::new(0, 1)]);
//! let mut board = Board::from_layout(&layout)?;
//! let mut events: Vec<GameEvent> = Vec::new();
//!
//! board.reveal(Position::new(0, 0), &mut events)?;
//!
//! assert!(board.status().is_won());
//! assert_eq!(
//!     events,
//!     vec![
//!         GameEvent::CellChanged { pos: Position::new(0, 0), display: CellDisplay::Number(1) },
//!         GameEvent::CellChanged { pos: Position::new(0, 1), display: CellDisplay::Mine },
//!         GameEvent::GameOver { outcome: GameOutcome::Won },
//!     ]
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Position`]: mines_core::Position

pub use self::{board::*, cell::*, clock::*, effects::*, error::*, game::*, observer::*};

mod board;
mod cell;
mod clock;
mod effects;
mod error;
mod game;
mod observer;
