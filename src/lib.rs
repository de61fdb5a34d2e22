//! The library components of the game. They allow initializing the game, taking directional
//! input and advancing the board model one tick at a time.
//!
//! The starting point of the library is the game.rs file, which contains the main game loop.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod board;
mod game;
mod input;

pub use game::init;
