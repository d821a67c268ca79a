use anyhow::Result;

use crate::config::{BLANK_CHAR, BORDER_CHAR, DEAD_SNAKE_CHAR, FOOD_CHAR, SNAKE_CHAR};
use crate::food::Food;
use crate::grid::{Grid, Position};
use crate::snake::Snake;
use crate::term::Terminal;

/// The border cell the score label is written next to: top right, so the
/// label runs off the board instead of over it.
pub fn score_cell(grid: &Grid) -> Position {
    Position::new(0, grid.width() - 1)
}

/// Paints every cell of the board, then refreshes. Nothing is diffed against
/// the previous frame.
pub fn render<T: Terminal + ?Sized>(term: &mut T, grid: &Grid, snake: &Snake, food: &Food, score: u32) -> Result<()> {
    for pos in grid.cells() {
        term.draw_glyph(pos, glyph_at(grid, snake, food, pos))?;
    }

    let corner = score_cell(grid);
    term.draw_text(Position::new(corner.row, corner.col + 1), &format!("      Score: {}", score))?;

    term.refresh()
}

/// Marks the body of a snake that just crashed
pub fn render_crash<T: Terminal + ?Sized>(term: &mut T, snake: &Snake) -> Result<()> {
    for pos in snake.segments() {
        term.draw_glyph(*pos, DEAD_SNAKE_CHAR)?;
    }

    term.refresh()
}

fn glyph_at(grid: &Grid, snake: &Snake, food: &Food, pos: Position) -> char {
    if snake.occupies(pos) {
        SNAKE_CHAR
    } else if food.is_at(pos) {
        FOOD_CHAR
    } else if grid.is_border(pos) {
        BORDER_CHAR
    } else {
        BLANK_CHAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::testing::FakeTerminal;

    fn draw(snake: &[(i16, i16)], food: (i16, i16), score: u32) -> FakeTerminal {
        let grid = Grid::new(6, 8);
        let snake = Snake::new(snake.iter().map(|&c| Position::from(c)));
        let mut term = FakeTerminal::default();
        render(&mut term, &grid, &snake, &Food::new(food.into()), score).unwrap();
        term
    }

    #[test]
    fn paints_the_whole_board() {
        let term = draw(&[(2, 2), (2, 3)], (4, 5), 0);

        assert_eq!(term.row_text(0, 0, 8), "########");
        assert_eq!(term.row_text(1, 0, 8), "#      #");
        assert_eq!(term.row_text(2, 0, 8), "# @@   #");
        assert_eq!(term.row_text(4, 0, 8), "#    $ #");
        assert_eq!(term.row_text(5, 0, 8), "########");
        assert_eq!(term.refreshes, 1);
    }

    #[test]
    fn snake_wins_over_food_and_border() {
        let term = draw(&[(3, 3), (0, 3)], (3, 3), 0);
        assert_eq!(term.glyph(3, 3), Some(SNAKE_CHAR));
        assert_eq!(term.glyph(0, 3), Some(SNAKE_CHAR));

        let term = draw(&[(2, 2)], (5, 4), 0);
        assert_eq!(term.glyph(5, 4), Some(FOOD_CHAR));
    }

    #[test]
    fn score_follows_the_corner() {
        let term = draw(&[(2, 2)], (3, 3), 42);

        assert_eq!(term.glyph(0, 7), Some(BORDER_CHAR));
        assert_eq!(term.row_text(0, 8, 15), "      Score: 42");
    }

    #[test]
    fn crash_marks_every_segment() {
        let snake = Snake::new(vec![Position::new(2, 2), Position::new(2, 3)]);
        let mut term = FakeTerminal::default();
        render_crash(&mut term, &snake).unwrap();

        assert_eq!(term.row_text(2, 2, 2), "XX");
    }
}
