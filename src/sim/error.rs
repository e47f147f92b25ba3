//! Construction-time validation errors
//!
//! The running simulation never fails; only a malformed layout is rejected,
//! and only when the game is built.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    #[error("path needs at least 2 waypoints, got {count}")]
    TooFewWaypoints { count: usize },

    #[error("wave table is empty")]
    EmptyWaveTable,

    #[error("wave {index} is invalid: {reason}")]
    InvalidWave { index: usize, reason: &'static str },
}
