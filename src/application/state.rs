use std::time::Instant;

use crate::domain::{Grid, Rule, all_rules, default_rule, presets};

/// SimState owns everything the per-tick callback touches: the grid,
/// the active rule, and bookkeeping for the HUD.
pub struct SimState {
    pub grid: Grid,
    pub rule: Box<dyn Rule>,
    rule_index: usize,
    pub generation: u64,
    pub last_step_ms: f32,
}

impl SimState {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            rule: default_rule(),
            rule_index: 0,
            generation: 0,
            last_step_ms: 0.0,
        }
    }

    /// Advance one generation. This is the frame clock callback.
    pub fn advance(&mut self) {
        let start = Instant::now();
        self.grid.step(self.rule.as_ref());
        self.last_step_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
    }

    /// Kill all cells and reset the generation counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Re-seed the grid and reset the generation counter
    pub fn randomize(&mut self) {
        self.grid.randomize();
        self.generation = 0;
    }

    /// Switch to the next rule in the registry, wrapping around
    pub fn cycle_rule(&mut self) {
        let mut rules = all_rules();
        self.rule_index = (self.rule_index + 1) % rules.len();
        self.rule = rules.swap_remove(self.rule_index).1;
    }

    /// Stamp a glider at the grid center
    pub fn spawn_glider(&mut self) {
        let (width, height) = self.grid.dimensions();
        let glider = presets::glider();
        glider.place_on(
            &mut self.grid,
            width.saturating_sub(glider.width) / 2,
            height.saturating_sub(glider.height) / 2,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn advance_applies_rule_and_counts_generations() {
        let mut grid = Grid::new(3, 3);
        for x in 0..3 {
            grid.set(x, 1, Cell::Alive);
        }
        let mut state = SimState::new(grid);

        state.advance();
        assert_eq!(state.generation, 1);
        assert_eq!(state.grid.get(1, 0), Some(Cell::Alive));
        assert_eq!(state.grid.get(0, 1), Some(Cell::Dead));
    }

    #[test]
    fn clear_resets_generation() {
        let mut state = SimState::new(Grid::new(8, 8));
        state.randomize();
        state.advance();
        state.clear();
        assert_eq!(state.generation, 0);
        assert_eq!(state.grid.population(), 0);
    }

    #[test]
    fn cycle_rule_wraps_back_to_default() {
        let mut state = SimState::new(Grid::new(4, 4));
        let initial = state.rule.name();

        let count = all_rules().len();
        for _ in 0..count {
            state.cycle_rule();
        }
        assert_eq!(state.rule.name(), initial);
    }

    #[test]
    fn spawn_glider_lands_centered() {
        let mut state = SimState::new(Grid::new(9, 9));
        state.spawn_glider();
        assert_eq!(state.grid.population(), 5);
        assert_eq!(state.grid.get(4, 5), Some(Cell::Alive));
    }
}
