//! Hard-coded configuration: board size, glyphs and the tuned speed values.

use std::time::Duration;

use crate::Coord;

/// Outer rows of the board, border included
pub const GRID_HEIGHT: Coord = 16;

/// Outer columns of the board, border included
pub const GRID_WIDTH: Coord = 64;

pub const SNAKE_CHAR: char = '@';
pub const FOOD_CHAR: char = '$';
pub const BORDER_CHAR: char = '#';
pub const BLANK_CHAR: char = ' ';
pub const DEAD_SNAKE_CHAR: char = 'X';

pub const MENU_PROMPT: &str = "WASD to move. Press Enter to start, enter Q/q to quit: ";

/// Speed and placement values. They were picked by eye for a typical terminal
/// font and are not meant to be exact.
#[derive(Clone, Debug, PartialEq)]
pub struct Tuning {
    /// Frame interval of a fresh game
    pub initial_delay: Duration,
    /// How much faster each eaten food makes the game
    pub delay_step: Duration,
    /// Fastest frame interval
    pub min_delay: Duration,
    /// Sleep multiplier while moving left or right. Terminal cells are taller
    /// than they are wide, so horizontal moves are sped up to look even.
    pub horizontal_factor: f64,
    /// Distance from the outer edge that food keeps. 1 means "anywhere in the interior".
    pub food_margin: Coord,
    /// How long the crashed snake stays on screen
    pub game_over_pause: Duration,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            initial_delay: Duration::from_micros(100_100),
            delay_step: Duration::from_micros(700),
            min_delay: Duration::from_micros(50_400),
            horizontal_factor: 0.7,
            food_margin: 2,
            game_over_pause: Duration::from_secs(1),
        }
    }
}
