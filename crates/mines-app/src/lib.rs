//! Shell-side helpers for Minesweeper front ends.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod input;
pub mod replay;
pub mod session;
pub mod settings;
