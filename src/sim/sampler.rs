//! Chance outcome sampling.

use crate::core::{Action, GameRng, Result, SimError};

/// Draws one outcome at a chance node.
///
/// Implementations must return one of `actions`. The driver never repairs a
/// distribution: any precondition violation is an error.
pub trait ChanceSampler {
    fn sample(&mut self, actions: &[Action], weights: &[f64]) -> Result<Action>;
}

/// Samples proportionally to the weights using a seeded `GameRng`.
#[derive(Clone, Debug)]
pub struct WeightedSampler {
    rng: GameRng,
}

impl WeightedSampler {
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl ChanceSampler for WeightedSampler {
    fn sample(&mut self, actions: &[Action], weights: &[f64]) -> Result<Action> {
        validate_distribution(actions, weights)?;

        self.rng
            .choose_weighted(weights)
            .map(|i| actions[i])
            .ok_or_else(|| SimError::malformed("weights sum to zero"))
    }
}

/// Check a chance distribution: matching lengths, at least one outcome,
/// finite non-negative weights with a positive sum.
pub fn validate_distribution(actions: &[Action], weights: &[f64]) -> Result<()> {
    if actions.len() != weights.len() {
        return Err(SimError::malformed(format!(
            "{} outcomes but {} weights",
            actions.len(),
            weights.len()
        )));
    }
    if actions.is_empty() {
        return Err(SimError::malformed("no outcomes"));
    }
    if let Some((i, w)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        return Err(SimError::malformed(format!(
            "weight {} for {} is not a non-negative number",
            w, actions[i]
        )));
    }
    let total: f64 = weights.iter().sum();
    if !total.is_finite() {
        return Err(SimError::malformed("weights overflow when summed"));
    }
    if total <= 0.0 {
        return Err(SimError::malformed("weights sum to zero"));
    }
    Ok(())
}
