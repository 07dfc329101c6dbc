//! Build-time run configuration.
//!
//! There are no command-line options and no environment variables: a run
//! is fully described by these constants.

/// Trials per run. One trial is one complete game: a prize placement and
/// one first choice by the contestant.
pub const ROUNDS: u64 = 10_000_000;

/// Doors per game; also the modulus of the deterministic outcome cycle.
pub const DOOR_COUNT: u64 = 3;

/// Progress meter granularity: one dot per this many percent completed.
pub const PROGRESS_STEP_PERCENT: u8 = 5;
