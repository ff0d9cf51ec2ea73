mod frame_clock;
mod state;

pub use frame_clock::{FrameClock, FrameClockError};
pub use state::SimState;
