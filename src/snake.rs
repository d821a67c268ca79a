use std::collections::VecDeque;

use rand::Rng;

use crate::grid::{Grid, Position};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Left | Right)
    }

    /// The cell one step away from `pos` in this direction
    pub fn step(self, pos: Position) -> Position {
        let (d_row, d_col) = match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        };

        Position::new(pos.row + d_row, pos.col + d_col)
    }
}

/// The snake's body, head first. Between frames every segment is next to the
/// one before it, and no two segments share a cell unless the snake just bit
/// itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    pub fn new<I: IntoIterator<Item = Position>>(segments: I) -> Self {
        let body: VecDeque<Position> = segments.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least a head");
        Snake { body }
    }

    /// A one-segment snake somewhere in the lower half of the board, so that
    /// it has room to go up at the start.
    pub fn spawn_head<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        let row = rng.gen_range(grid.height() / 2..=grid.height() - 2);
        let col = rng.gen_range(1..=grid.width() - 2);

        Snake::new(vec![Position::new(row, col)])
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> + '_ {
        self.body.iter()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&pos| pos == head)
    }

    /// Moves the head one cell in `direction` and lets every other segment
    /// take the place of the one in front of it. With `grew` set the old tail
    /// cell stays occupied by a new last segment.
    pub fn advance(&mut self, direction: Direction, grew: bool) {
        let new_head = direction.step(self.head());
        self.body.push_front(new_head);

        if !grew {
            self.body.pop_back();
        }
    }
}
