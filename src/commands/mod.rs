//! Command implementations

pub mod check;
pub mod simple;
pub mod simulate;

pub use check::{CheckReport, WordSummary, check_content};
pub use simple::run_simple;
pub use simulate::{SessionRun, SimulationConfig, SimulationStatistics, play_scripted_session, run_simulation};
