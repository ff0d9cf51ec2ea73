use macroquad::prelude::*;

use crate::application::SimState;

/// Edge length of one cell quad, in pixels
pub const CELL_SIZE: f32 = 5.0;

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);

/// Clear the frame, draw every cell as a colored quad, then the HUD.
/// Full redraw every frame; presentation happens in the frame loop.
pub fn draw_frame(state: &SimState, clock_running: bool) {
    clear_background(BLACK);
    draw_grid(state);
    draw_hud(state, clock_running);
}

fn draw_grid(state: &SimState) {
    for (x, y, cell) in state.grid.iter_cells() {
        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        draw_rectangle(
            x as f32 * CELL_SIZE,
            y as f32 * CELL_SIZE,
            CELL_SIZE,
            CELL_SIZE,
            color,
        );
    }
}

fn draw_hud(state: &SimState, clock_running: bool) {
    let (status, status_color) = if clock_running {
        ("Running", GREEN)
    } else {
        ("Suspended", ORANGE)
    };

    let lines = [
        (
            format!("{} | gen {}", state.rule.name(), state.generation),
            WHITE,
        ),
        (
            format!(
                "pop {} | step {:.2}ms | fps {}",
                state.grid.population(),
                state.last_step_ms,
                get_fps()
            ),
            GRAY,
        ),
        (status.to_owned(), status_color),
        (
            "[Space] run  [R]andom  [C]lear  [Tab] rule  [G]lider".to_owned(),
            GRAY,
        ),
    ];

    lines.iter().enumerate().for_each(|(i, (text, color))| {
        draw_text(text, 8.0, 18.0 + 16.0 * i as f32, 16.0, *color);
    });
}
