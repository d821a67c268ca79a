//! Per-frame checks that combine the snake, the food and the board.

use crate::food::Food;
use crate::grid::Grid;
use crate::snake::Snake;

pub fn is_food_eaten(snake: &Snake, food: &Food) -> bool {
    food.is_at(snake.head())
}

/// The head left the interior (hit the border) or bit the body.
pub fn is_game_over(snake: &Snake, grid: &Grid) -> bool {
    !grid.is_interior(snake.head()) || snake.self_collision()
}
