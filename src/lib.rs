#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![doc = include_str!("../README.md")]

/// Side to move and stone colors.
pub mod types;

/// NoGo board and placement rules.
pub mod board;

/// Placement moves and candidate lists.
pub mod action;

/// Game abstraction consumed by the search algorithms.
pub mod game_tree_search;

/// Pseudorandom number generation
pub mod rng;

/// Re-exports the `smallvec` crate
pub use smallvec;

/// Re-exports the `rand` create
pub use rand;

/// Re-exports the `enum_map` crate
pub use enum_map;

/// Re-exports the `thiserror` crate
pub use thiserror;

pub mod prelude {
    pub use crate::action::{ActionList, Place};
    pub use crate::board::{Board, BoardError, PlaceError};
    pub use crate::game_tree_search::Game;
    pub use crate::rng::RngState;
    pub use crate::types::{by_color::ByColor, color::Color};
}

#[cfg(test)]
mod tests;
