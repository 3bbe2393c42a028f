//! # Connect Four
//!
//! Connect Four on a 6x7 grid against a computer opponent that plays by
//! minimax search with alpha-beta pruning. Features a terminal UI built
//! with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, lines of four, turn-taking session
//! - [`ai`]: Agent trait, position heuristic, minimax search, random baseline
//! - [`ui`]: Terminal UI: game view and input loop
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;

#[cfg(test)]
mod arbitrary;
