//! Command implementations

pub mod check;
pub mod simple;
pub mod simulate;

pub use check::{CheckReport, check_word_list};
pub use simple::{run_simple, run_simple_with};
pub use simulate::{SimulationConfig, SimulationResult, play_round, run_simulation};
