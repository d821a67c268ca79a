use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::Coord;

/// A cell on the board. Row 0 is the top, column 0 the left edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: Coord,
    pub col: Coord,
}

impl Position {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Position { row, col }
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((row, col): (Coord, Coord)) -> Self {
        Position { row, col }
    }
}

/// The fixed play field. The outermost ring of cells is the border; touching
/// it ends the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: Coord,
    width: Coord,
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(GRID_HEIGHT, GRID_WIDTH)
    }
}

impl Grid {
    pub(crate) const fn new(height: Coord, width: Coord) -> Self {
        Grid { height, width }
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.height).contains(&pos.row) && (0..self.width).contains(&pos.col)
    }

    pub fn is_border(&self, pos: Position) -> bool {
        self.contains(pos)
            && (pos.row == 0 || pos.col == 0 || pos.row == self.height - 1 || pos.col == self.width - 1)
    }

    pub fn is_interior(&self, pos: Position) -> bool {
        self.contains(pos) && !self.is_border(pos)
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }

    /// Cells at least `margin` away from the outer edge. A margin of 1 is the interior.
    pub fn inset(&self, margin: Coord) -> impl Iterator<Item = Position> {
        let margin = margin.max(1);
        let (last_row, last_col) = (self.height - 1 - margin, self.width - 1 - margin);
        (margin..=last_row).flat_map(move |row| (margin..=last_col).map(move |col| Position::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_is_the_outer_ring() {
        let grid = Grid::new(16, 64);

        assert!(grid.is_border(Position::new(0, 10)));
        assert!(grid.is_border(Position::new(15, 10)));
        assert!(grid.is_border(Position::new(7, 0)));
        assert!(grid.is_border(Position::new(7, 63)));
        assert!(!grid.is_border(Position::new(1, 1)));
        assert!(!grid.is_border(Position::new(-1, 5)));
    }

    #[test]
    fn interior_excludes_border_and_outside() {
        let grid = Grid::new(16, 64);

        assert!(grid.is_interior(Position::new(1, 1)));
        assert!(grid.is_interior(Position::new(14, 62)));
        assert!(!grid.is_interior(Position::new(0, 5)));
        assert!(!grid.is_interior(Position::new(16, 5)));
        assert_eq!(grid.inset(1).count(), 14 * 62);
    }

    #[test]
    fn cells_cover_the_whole_board() {
        let grid = Grid::new(4, 5);
        let cells: Vec<_> = grid.cells().collect();

        assert_eq!(cells.len(), 20);
        assert_eq!(cells[0], Position::new(0, 0));
        assert_eq!(cells[19], Position::new(3, 4));
    }

    #[test]
    fn inset_shrinks_from_every_side() {
        let grid = Grid::new(16, 64);
        let cells: Vec<_> = grid.inset(2).collect();

        assert_eq!(cells.len(), 12 * 60);
        assert!(cells.iter().all(|p| (2..=13).contains(&p.row) && (2..=61).contains(&p.col)));
    }
}
