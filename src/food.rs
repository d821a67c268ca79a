use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Grid, Position};
use crate::snake::Snake;
use crate::Coord;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    pos: Position,
}

impl Food {
    pub fn new(pos: Position) -> Self {
        Food { pos }
    }

    /// Picks a free cell at least `margin` cells from the outer edge. Sampling
    /// is done over the free cells only, so this never loops; `None` means the
    /// snake fills every candidate cell.
    pub fn spawn<R: Rng + ?Sized>(grid: &Grid, margin: Coord, snake: &Snake, rng: &mut R) -> Option<Food> {
        let choices: Vec<Position> = grid.inset(margin).filter(|&pos| !snake.occupies(pos)).collect();
        choices.choose(rng).copied().map(Food::new)
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn is_at(&self, pos: Position) -> bool {
        self.pos == pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn never_lands_on_the_snake() {
        let grid = Grid::new(8, 8);
        let snake = Snake::new((2..=5).map(|col| Position::new(3, col)));
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..1000 {
            let food = Food::spawn(&grid, 2, &snake, &mut rng).unwrap();
            assert!(!snake.occupies(food.position()));
            assert!((2..=5).contains(&food.position().row));
            assert!((2..=5).contains(&food.position().col));
        }
    }

    #[test]
    fn margin_of_one_uses_the_whole_interior() {
        let grid = Grid::new(4, 4);
        let snake = Snake::new(vec![Position::new(1, 1), Position::new(1, 2), Position::new(2, 2)]);
        let mut rng = StdRng::seed_from_u64(3);

        let food = Food::spawn(&grid, 1, &snake, &mut rng).unwrap();
        assert_eq!(food.position(), Position::new(2, 1));
    }

    #[test]
    fn nothing_to_spawn_on_a_full_board() {
        let grid = Grid::new(4, 4);
        let snake = Snake::new(grid.inset(1));
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(Food::spawn(&grid, 1, &snake, &mut rng), None);
    }

    #[test]
    fn is_at_compares_positions() {
        let food = Food::new(Position::new(4, 5));
        assert!(food.is_at(Position::new(4, 5)));
        assert!(!food.is_at(Position::new(5, 4)));
    }
}
