//! Error types for a mission run.

use thiserror::Error;

use crate::hardware::HardwareError;

/// Errors that can end a mission early or reject a received value.
#[derive(Debug, Error)]
pub enum MissionError {
    #[error("target not found after {cells} cells")]
    SearchTimeout { cells: usize },

    #[error("invalid move value: {0} (expected 1-4)")]
    InvalidMoveValue(i32),

    #[error("failed to transmit move #{index} ({value}): {source}")]
    TransmissionFailed {
        index: usize,
        value: i32,
        #[source]
        source: HardwareError,
    },

    #[error("hardware error: {0}")]
    Hardware(#[from] HardwareError),

    #[error("mission already finished")]
    AlreadyDone,
}

pub type Result<T> = std::result::Result<T, MissionError>;
