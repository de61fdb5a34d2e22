//! # snakeling
//!
//! This crate is a game about steering a snake across a bordered grid, one line of input at a
//! time. There is no real-time tick; the board sits still until you press the Enter key, which
//! makes it playable over the dumbest of terminals.
//!
//! The snake grows by one cell whenever it runs over the food, and the game ends the moment it
//! runs into a border or into its own body. The final score is the number of pieces of food
//! eaten along the way.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use snakeling::init;

fn main() -> Result<()> {
    init()
}
