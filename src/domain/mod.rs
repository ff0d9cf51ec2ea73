mod cell;
mod grid;
mod patterns;
mod rules;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use rules::{
    ConwayRule, DayAndNightRule, HighLifeRule, Rule, SeedsRule, all_rules, default_rule,
};
