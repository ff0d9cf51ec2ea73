use super::{Cell, rules::Rule};
use rayon::prelude::*;

/// Grid holds the 2D automaton state in a flat row-major vector.
/// Dimensions are fixed at construction; cell states mutate in place
/// once per generation.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Derive grid dimensions from a viewport: one column/row per whole
    /// cell that fits.
    pub fn from_viewport(width: f32, height: f32, cell_size: f32) -> Self {
        Self::new(
            (width / cell_size).floor() as usize,
            (height / cell_size).floor() as usize,
        )
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position (mutable for painting)
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live neighbors in the Moore neighborhood.
    /// Out-of-bounds neighbors are dead; the grid does not wrap.
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        (-1i32..=1)
            .flat_map(|dy| (-1i32..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                (nx >= 0 && ny >= 0)
                    .then(|| self.get(nx as usize, ny as usize))
                    .flatten()
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Advance one generation in place. Every next state is computed
    /// from the pre-step snapshot before any is applied, so update
    /// order cannot influence the result.
    pub fn step(&mut self, rule: &dyn Rule) {
        let next: Vec<Cell> = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                rule.evolve(current, self.count_live_neighbors(x, y))
            })
            .collect();

        self.cells = next;
    }

    /// Parallel variant of `step` using rayon. Same snapshot semantics;
    /// worthwhile for grids well beyond viewport size.
    pub fn step_parallel(&mut self, rule: &dyn Rule) {
        let next: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map(|y| (0..self.width).into_par_iter().map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                rule.evolve(current, self.count_live_neighbors(x, y))
            })
            .collect();

        self.cells = next;
    }

    /// Kill all cells
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Uniform random state per cell
    pub fn randomize(&mut self) {
        use rand::Rng;
        let mut rng = rand::rng();

        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random::<bool>()));
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }
}
