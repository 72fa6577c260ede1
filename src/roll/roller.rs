use crate::common::Count;
use num::bigint::RandBigInt;
use rand::Rng;

/// Source of randomness for sampling distributions.
pub trait Roller {
    /// Picks a value uniformly from `0..bound`. `bound` is never zero.
    fn pick(&mut self, bound: &Count) -> Count;
}

impl<R: Rng> Roller for R {
    fn pick(&mut self, bound: &Count) -> Count {
        self.gen_biguint_below(bound)
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;
