//! Engine error type.

use thiserror::Error;

/// Errors reported before any trial runs. The trial loop itself cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A zero-round run has no defined win rate.
    #[error("round count must be positive, got 0")]
    ZeroRounds,
}
