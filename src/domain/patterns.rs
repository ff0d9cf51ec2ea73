use super::{Cell, Grid};

/// A reusable arrangement of live cells that can be stamped onto the grid
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Place pattern on grid at specified position.
    /// Cells landing outside the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        for (dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, Cell::Alive);
        }
    }
}

/// Classic pattern library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_dimensions_from_cells() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
    }

    #[test]
    fn place_on_sets_only_pattern_cells() {
        let mut grid = Grid::new(10, 10);
        presets::block().place_on(&mut grid, 4, 4);
        assert_eq!(grid.population(), 4);
        assert_eq!(grid.get(4, 4), Some(Cell::Alive));
        assert_eq!(grid.get(5, 5), Some(Cell::Alive));
    }

    #[test]
    fn place_on_clips_at_grid_edge() {
        let mut grid = Grid::new(3, 3);
        presets::toad().place_on(&mut grid, 1, 1);
        assert!(grid.population() < presets::toad().cells.len());
    }
}
