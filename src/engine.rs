//! Trial engine — runs N independent trials and counts first-choice wins.
//!
//! Each trial cycles the prize placement (`outcome = i % 3`), draws the
//! contestant's pick from a [`ChoiceSource`], and counts a win when the
//! pick matches the prize door. Every trial ticks a [`ProgressSink`]; the
//! sink is display-only and cannot affect the counts.

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::constants::DOOR_COUNT;
use crate::error::EngineError;
use crate::game::{prize_door, ChoiceSource, UniformChoice};
use crate::progress::{NullProgress, ProgressSink};

/// Results of one batch of trials.
#[derive(Debug, Clone)]
pub struct TrialStats {
    pub rounds: u64,
    pub first_choice_wins: u64,
    pub elapsed: Duration,
}

impl TrialStats {
    /// Fraction of trials where the first pick was correct, in [0, 1].
    pub fn first_choice_rate(&self) -> f64 {
        self.first_choice_wins as f64 / self.rounds as f64
    }

    /// Fraction of trials where switching would have won.
    pub fn switch_rate(&self) -> f64 {
        (self.rounds - self.first_choice_wins) as f64 / self.rounds as f64
    }

    pub fn first_choice_pct(&self) -> f64 {
        self.first_choice_rate() * 100.0
    }

    /// Switch percentage, computed as `100 − first_choice_pct` so the two
    /// displayed percentages always sum to exactly 100.
    pub fn switch_pct(&self) -> f64 {
        100.0 - self.first_choice_pct()
    }

    /// Standard error of the observed first-choice rate.
    pub fn std_error(&self) -> f64 {
        let p = self.first_choice_rate();
        (p * (1.0 - p) / self.rounds as f64).sqrt()
    }
}

/// Run `rounds` independent trials.
///
/// Rejects `rounds == 0` up front: a zero-round run has no defined win
/// rate. For any positive count the loop runs to completion.
pub fn run<C, P>(rounds: u64, choices: &mut C, progress: &mut P) -> Result<TrialStats, EngineError>
where
    C: ChoiceSource,
    P: ProgressSink,
{
    if rounds == 0 {
        return Err(EngineError::ZeroRounds);
    }

    let start = Instant::now();
    let mut first_choice_wins: u64 = 0;

    for i in 0..rounds {
        let outcome = (i % DOOR_COUNT) as u8;
        let choice = choices.next_choice();

        if choice == prize_door(outcome) {
            first_choice_wins += 1;
        }

        progress.on_trial(i, rounds);
    }

    Ok(TrialStats {
        rounds,
        first_choice_wins,
        elapsed: start.elapsed(),
    })
}

/// Run with a fresh `SmallRng` seeded from `seed` and no progress UI.
pub fn run_seeded(rounds: u64, seed: u64) -> Result<TrialStats, EngineError> {
    let mut choices = UniformChoice::new(SmallRng::seed_from_u64(seed));
    run(rounds, &mut choices, &mut NullProgress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_deterministic() {
        let a = run_seeded(5_000, 123).unwrap();
        let b = run_seeded(5_000, 123).unwrap();
        assert_eq!(
            a.first_choice_wins, b.first_choice_wins,
            "Same seed should produce same win count"
        );
    }

    #[test]
    fn test_wins_within_bounds() {
        let stats = run_seeded(5_000, 7).unwrap();
        assert!(stats.first_choice_wins <= stats.rounds);
    }

    #[test]
    fn test_switch_rate_complements_first_choice() {
        let stats = run_seeded(4_321, 99).unwrap();
        let sum = stats.first_choice_rate() + stats.switch_rate();
        assert!((sum - 1.0).abs() < 1e-12, "rates sum to {}", sum);
        assert!(stats.std_error() > 0.0);
    }
}
