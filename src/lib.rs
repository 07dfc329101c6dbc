//! # Monty — Monte Carlo estimator for the three-door switch puzzle
//!
//! Estimates, by repeated random trials, how often a contestant's first
//! pick in the classic three-door game show puzzle is correct versus how
//! often switching after the host opens a wrong door would have won.
//!
//! One run executes [`constants::ROUNDS`] independent trials. Each trial:
//!
//! 1. cycles the prize placement deterministically (`outcome = i % 3`, so
//!    every placement is used equally often over a run),
//! 2. draws the contestant's pick uniformly from doors 1-3,
//! 3. counts a first-choice win iff the pick matches the prize door.
//!
//! The switch win rate is the exact complement of the first-choice rate:
//! in every trial exactly one of "first pick is right" / "switching is
//! right" holds.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`constants`] | Round count and progress granularity |
//! | [`game`] | Prize-door mapping and the contestant's choice source |
//! | [`engine`] | The trial loop and result statistics |
//! | [`progress`] | Dot-bar progress meter and the sink seam |
//! | [`format`] | Thousands-separator rendering |
//! | [`error`] | Engine error type |

pub mod constants;
pub mod engine;
pub mod error;
pub mod format;
pub mod game;
pub mod progress;
