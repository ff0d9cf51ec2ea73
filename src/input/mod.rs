use macroquad::prelude::*;

use crate::application::{FrameClock, SimState};
use crate::domain::Cell;
use crate::rendering::CELL_SIZE;

/// Keyboard bindings: Space drives the frame clock, the rest edit state
pub fn process_keyboard(state: &mut SimState, clock: &FrameClock<SimState>) {
    if is_key_pressed(KeyCode::Space) {
        if clock.running() {
            clock.suspend();
        } else {
            clock.start();
        }
    }
    if is_key_pressed(KeyCode::C) {
        state.clear();
    }
    if is_key_pressed(KeyCode::R) {
        state.randomize();
    }
    if is_key_pressed(KeyCode::Tab) {
        state.cycle_rule();
    }
    if is_key_pressed(KeyCode::G) {
        state.spawn_glider();
    }
}

/// Paint cells with the mouse while the clock is suspended.
/// Left button paints alive, right button erases.
pub fn handle_mouse_paint(state: &mut SimState, clock: &FrameClock<SimState>) {
    if clock.running() {
        return;
    }

    let (mouse_x, mouse_y) = mouse_position();
    let grid_x = (mouse_x / CELL_SIZE) as usize;
    let grid_y = (mouse_y / CELL_SIZE) as usize;

    if is_mouse_button_down(MouseButton::Left) {
        state.grid.set(grid_x, grid_y, Cell::Alive);
    } else if is_mouse_button_down(MouseButton::Right) {
        state.grid.set(grid_x, grid_y, Cell::Dead);
    }
}
