//! Exact discrete distributions over integer outcomes.
//!
//! Every outcome carries an integer weight; its probability is that weight divided by the
//! denominator shared by the whole distribution. Weights of equal outcomes are always merged, and
//! the weights always add up to the denominator.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;
use num::rational::Ratio;
use num::traits::{One, Zero};
use num::ToPrimitive;

use crate::common::*;
use crate::error::DiceError;
use crate::roll::Roller;

type DistMap = BTreeMap<Int, Count>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    outcomes: DistMap,
    denom: Count,
}

fn accumulate(outcomes: &mut DistMap, outcome: Int, weight: Count) {
    match outcomes.entry(outcome) {
        Entry::Vacant(e) => {
            e.insert(weight);
        }
        Entry::Occupied(mut e) => {
            *e.get_mut() += weight;
        }
    }
}

impl Distribution {
    /// The distribution that always yields `value`.
    pub fn single(value: Int) -> Self {
        Self::new(Count::one(), [(value, Count::one())].into())
    }

    /// A fair die: outcomes `1..=sides`, each with probability `1/sides`.
    pub fn uniform(sides: NonZeroUInt) -> Self {
        let sides: UInt = sides.get();
        Self::new(
            Count::from(sides),
            (1..=Int::from(sides)).map(|x| (x, Count::one())).collect(),
        )
    }

    /// Builds a distribution from raw weights, merging repeated outcomes. The denominator is the
    /// total weight. Returns `None` when the total weight is zero.
    pub fn from_weights(weights: impl IntoIterator<Item = (Int, Count)>) -> Option<Self> {
        let mut outcomes = DistMap::new();
        for (k, c) in weights {
            accumulate(&mut outcomes, k, c);
        }
        let denom: Count = outcomes.values().sum();
        if denom.is_zero() {
            None
        } else {
            Some(Self::new(denom, outcomes))
        }
    }

    fn new(denom: Count, outcomes: DistMap) -> Self {
        Self { outcomes, denom }
    }

    /// Number of distinct outcomes, including outcomes of zero probability.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn denom(&self) -> &Count {
        &self.denom
    }

    /// Outcomes with their weights, ascending by outcome.
    pub fn outcomes(&self) -> impl Iterator<Item = (Int, &Count)> + '_ {
        self.outcomes.iter().map(|(k, c)| (*k, c))
    }

    pub fn weight(&self, outcome: Int) -> Count {
        self.outcomes.get(&outcome).cloned().unwrap_or_default()
    }

    pub fn probability(&self, outcome: Int) -> Ratio<Count> {
        Ratio::new(self.weight(outcome), self.denom.clone())
    }

    /// Whether only a single outcome can actually occur.
    pub fn is_deterministic(&self) -> bool {
        self.outcomes.values().filter(|c| !c.is_zero()).count() == 1
    }

    /// Applies `op` to every outcome, merging outcomes that map to the same value.
    pub fn try_map<F>(&self, op: F) -> Result<Self, DiceError>
    where
        F: Fn(Int) -> Result<Int, DiceError>,
    {
        let mut outcomes = DistMap::new();
        for (k, c) in &self.outcomes {
            accumulate(&mut outcomes, op(*k)?, c.clone());
        }
        Ok(Self::new(self.denom.clone(), outcomes))
    }

    /// Convolution: applies `op` to every pair of outcomes of `self` and `other`, weighting each
    /// result by the product of both weights.
    pub fn try_combine_with<F>(&self, other: &Self, op: F) -> Result<Self, DiceError>
    where
        F: Fn(Int, Int) -> Result<Int, DiceError>,
    {
        let mut outcomes = DistMap::new();
        for ((k1, c1), (k2, c2)) in self.outcomes.iter().cartesian_product(&other.outcomes) {
            accumulate(&mut outcomes, op(*k1, *k2)?, c1 * c2);
        }
        Ok(Self::new(&self.denom * &other.denom, outcomes))
    }

    /// Folds `count` independent copies of this distribution together with `op`.
    pub fn try_repeat<F>(&self, count: usize, op: F) -> Result<Self, DiceError>
    where
        F: Fn(Int, Int) -> Result<Int, DiceError>,
    {
        let mut result = self.clone();
        for _ in 1..count {
            result = result.try_combine_with(self, &op)?;
        }
        Ok(result)
    }

    /// Makes sure each of `outcomes` is listed, adding zero-weight entries where missing.
    #[must_use]
    pub fn with_buckets(mut self, outcomes: impl IntoIterator<Item = Int>) -> Self {
        for k in outcomes {
            self.outcomes.entry(k).or_default();
        }
        self
    }

    /// Fails if the weights no longer add up to the denominator.
    pub fn check_mass(&self) -> Result<(), DiceError> {
        let total: Count = self.outcomes.values().sum();
        if total == self.denom && !self.denom.is_zero() {
            Ok(())
        } else {
            Err(DiceError::invariant(format!(
                "total weight {} does not match denominator {}",
                total, self.denom
            )))
        }
    }

    /// Probabilities as percentages, ascending by outcome.
    pub fn percentages(&self) -> Result<Vec<(Int, f64)>, DiceError> {
        self.outcomes
            .keys()
            .map(|&k| {
                self.probability(k)
                    .to_f64()
                    .map(|p| (k, p * 100.0))
                    .ok_or_else(|| DiceError::invariant(format!("probability of {} is not representable", k)))
            })
            .collect()
    }

    /// Draws one outcome with its exact probability.
    pub fn sample<R: Roller + ?Sized>(&self, roller: &mut R) -> Int {
        let target = roller.pick(&self.denom);
        let mut acc = Count::zero();
        for (k, c) in &self.outcomes {
            acc += c;
            if target < acc {
                return *k;
            }
        }
        // Weights add up to the denominator, so the loop always returns
        self.outcomes.keys().next_back().copied().unwrap_or_default()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self
            .outcomes
            .keys()
            .map(|&k| format!("{}: {}", k, self.probability(k)))
            .join(", ");
        write!(f, "{{{}}}", items)
    }
}
