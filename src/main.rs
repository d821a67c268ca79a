mod config;
mod difficulty;
mod food;
mod game;
mod grid;
mod input;
mod render;
mod rules;
mod snake;
mod term;

use anyhow::Result;

use crate::config::Tuning;

/// Board coordinate. Signed, so a head that left the board is still a position.
pub type Coord = i16;

fn main() -> Result<()> {
    env_logger::init();

    let game = game::SnakeGame::new(Tuning::default());
    game.run(&mut rand::thread_rng())
}
