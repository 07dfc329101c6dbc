//! Integration tests for the trial engine and the progress meter.

use monty::engine::{self, run_seeded};
use monty::error::EngineError;
use monty::game::ChoiceSource;
use monty::progress::{ConsoleMeter, NullProgress};

/// Stub source: the contestant always picks the same door.
struct FixedChoice(u8);

impl ChoiceSource for FixedChoice {
    fn next_choice(&mut self) -> u8 {
        self.0
    }
}

#[test]
fn zero_rounds_rejected() {
    let mut choices = FixedChoice(1);
    let err = engine::run(0, &mut choices, &mut NullProgress).unwrap_err();
    assert_eq!(err, EngineError::ZeroRounds);
}

#[test]
fn fixed_choice_wins_exactly_on_matching_outcome() {
    // Outcomes cycle 0,1,2; door 1 only matches outcome 0.
    let mut choices = FixedChoice(1);
    let stats = engine::run(3, &mut choices, &mut NullProgress).unwrap();
    assert_eq!(stats.first_choice_wins, 1);
}

#[test]
fn outcome_cycle_uses_each_placement_equally() {
    // With a constant pick, the win count equals the number of trials
    // whose outcome matches that door: rounds/3 when rounds % 3 == 0.
    for door in 1..=3u8 {
        let mut choices = FixedChoice(door);
        let stats = engine::run(9_000, &mut choices, &mut NullProgress).unwrap();
        assert_eq!(stats.first_choice_wins, 3_000, "door {}", door);
    }
}

#[test]
fn same_seed_same_result() {
    let a = run_seeded(10_000, 123).unwrap();
    let b = run_seeded(10_000, 123).unwrap();
    assert_eq!(a.first_choice_wins, b.first_choice_wins);
}

#[test]
fn percentages_are_exact_complements() {
    let stats = run_seeded(10_001, 7).unwrap();
    assert_eq!(stats.first_choice_pct() + stats.switch_pct(), 100.0);
    assert!((stats.first_choice_rate() + stats.switch_rate() - 1.0).abs() < 1e-12);
}

#[test]
fn converges_to_one_third() {
    // 1M trials: 1σ of the rate is ~0.047pp, so ±0.5pp is a >10σ margin.
    let stats = run_seeded(1_000_000, 42).unwrap();
    let pct = stats.first_choice_pct();
    assert!(
        (pct - 33.333).abs() < 0.5,
        "first-choice rate {:.3}% outside ±0.5pp of 33.333%",
        pct
    );
}

#[test]
fn progress_meter_emits_twenty_dots() {
    let mut choices = FixedChoice(2);
    let mut meter = ConsoleMeter::new(Vec::new());
    meter.banner(1_000).unwrap();
    let stats = engine::run(1_000, &mut choices, &mut meter).unwrap();
    meter.finish().unwrap();

    let out = String::from_utf8(meter.into_inner()).unwrap();
    let expected = format!(
        "Progress meter for 1,000 rounds\n[ 0%            100% ]\n[{}]\n\n",
        ".".repeat(20)
    );
    assert_eq!(out, expected);
    // The meter is display-only: counts match a meterless run of the
    // same fixed choice.
    let mut silent = FixedChoice(2);
    let baseline = engine::run(1_000, &mut silent, &mut NullProgress).unwrap();
    assert_eq!(stats.first_choice_wins, baseline.first_choice_wins);
}
