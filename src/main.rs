use macroquad::prelude::*;

use cellular_automaton::rendering::{self, CELL_SIZE};
use cellular_automaton::{FrameClock, Grid, SimState, input};

/// Target tick rate for the frame clock, in Hz
const REFRESH_RATE: f32 = 60.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "Cellular Automaton".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Grid dimensions are fixed at startup from the viewport
    let mut grid = Grid::from_viewport(screen_width(), screen_height(), CELL_SIZE);
    grid.randomize();

    let (columns, rows) = grid.dimensions();
    info!("{columns}x{rows} cells at {CELL_SIZE}px, clock at {REFRESH_RATE}Hz");

    let mut state = SimState::new(grid);

    let mut clock = match FrameClock::new(REFRESH_RATE) {
        Ok(clock) => clock,
        Err(err) => {
            error!("frame clock setup failed: {err}");
            return;
        }
    };
    clock.set_callback(SimState::advance);
    clock.start();

    loop {
        input::process_keyboard(&mut state, &clock);
        input::handle_mouse_paint(&mut state, &clock);

        // At most one generation per rendered frame
        clock.pump(&mut state);

        rendering::draw_frame(&state, clock.running());

        next_frame().await;
    }
}
