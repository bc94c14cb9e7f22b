//! Board and piece model for the gridfall playing agent.
//!
//! This crate holds the game-rule layer with no strategy in it:
//!
//! - [`catalog`] - static tetromino shape/rotation occupancy data
//! - [`Piece`] / [`Shape`] - immutable falling-piece values
//! - [`Board`] - the 10×20 grid, legality checks, and line clearing
//! - [`GameStats`] - score, level, and piece counters
//!
//! Everything randomized takes an injectable [`rand::Rng`], so piece
//! sequences are reproducible from a seed.

pub use self::{board::*, piece::*, stats::*};

pub mod board;
pub mod catalog;
pub mod piece;
pub mod stats;
