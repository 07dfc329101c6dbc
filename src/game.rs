//! Puzzle mechanics: prize placement and the contestant's first pick.

use rand::Rng;

/// Door (1-indexed) hiding the prize for game outcome `outcome` (0-2).
///
/// Outcome k places the prize behind door k+1, so cycling outcomes over a
/// run whose length is a multiple of 3 uses each placement equally often.
#[inline(always)]
pub fn prize_door(outcome: u8) -> u8 {
    outcome + 1
}

/// Source of the contestant's first pick, one door per trial.
pub trait ChoiceSource {
    /// Door number in 1..=3.
    fn next_choice(&mut self) -> u8;
}

/// Uniform, independent picks from a threaded RNG.
///
/// One source is built per run and carried through the whole trial loop;
/// draws are independent of each other and of the outcome cycle.
pub struct UniformChoice<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformChoice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ChoiceSource for UniformChoice<R> {
    #[inline(always)]
    fn next_choice(&mut self) -> u8 {
        self.rng.random_range(1..=3)
    }
}
