//! Forced openings: labelled actions applied before agents take over.
//!
//! Openings are expressed as labels, not actions, because action
//! identifiers only mean something relative to the state that lists them.
//! The driver resolves each label against the live state when it reaches it.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Result, SimError};
use crate::rules::GameState;

use super::sampler::validate_distribution;

/// How the forced opening of a session is chosen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpeningSpec {
    /// Agents play from the initial state.
    #[default]
    None,
    /// These labels, in order.
    Fixed(Vec<String>),
    /// `plies` random actions walked from the initial state.
    Random { plies: usize },
}

impl OpeningSpec {
    /// Produce the label sequence for a session starting at `initial`.
    pub fn labels<S: GameState>(&self, initial: &S, rng: &mut GameRng) -> Result<Vec<String>> {
        match self {
            OpeningSpec::None => Ok(Vec::new()),
            OpeningSpec::Fixed(labels) => Ok(labels.clone()),
            OpeningSpec::Random { plies } => random_opening(initial, *plies, rng),
        }
    }
}

/// Walk up to `plies` random actions from `initial` and return their labels.
///
/// Decision nodes pick uniformly among legal actions, chance nodes sample
/// by weight. Stops early if the walk reaches a terminal state. `initial`
/// itself is not modified.
pub fn random_opening<S: GameState>(
    initial: &S,
    plies: usize,
    rng: &mut GameRng,
) -> Result<Vec<String>> {
    let mut state = initial.clone();
    let mut labels = Vec::with_capacity(plies);

    for _ in 0..plies {
        if state.is_terminal() {
            break;
        }
        if state.is_simultaneous_node() {
            return Err(SimError::UnsupportedGameMode);
        }

        let player = state.current_player();
        let action = if state.is_chance_node() {
            let (actions, weights): (Vec<_>, Vec<_>) = state.chance_outcomes().into_iter().unzip();
            validate_distribution(&actions, &weights)?;
            rng.choose_weighted(&weights)
                .map(|i| actions[i])
                .ok_or_else(|| SimError::malformed("weights sum to zero"))?
        } else {
            let actions = state.legal_actions();
            *rng.choose(&actions).ok_or(SimError::NoLegalActions { player })?
        };

        labels.push(state.action_to_string(player, action));
        state.apply_action(action);
    }

    Ok(labels)
}
