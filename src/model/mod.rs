//! Core data model for mazerun.
//!
//! The move alphabet, the log it accumulates into, and the report
//! a finished mission leaves behind.

mod log;
mod moves;
mod report;

pub use log::MoveLog;
pub use moves::Move;
pub use report::MissionReport;
