// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Frame clock and coordination
pub mod application;

// Infrastructure layer - Rendering and input
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::{FrameClock, FrameClockError, SimState};
pub use domain::{Cell, ConwayRule, Grid, Pattern, Rule, presets};
