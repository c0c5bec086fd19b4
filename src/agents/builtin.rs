//! Built-in agents.
//!
//! Neither agent learns or remembers anything; they exist so a session can
//! run without an external decision maker.

use crate::core::{Action, GameRng, PlayerId, Result, SimError};
use crate::rules::GameState;

use super::agent::Agent;

// =============================================================================
// Random
// =============================================================================

/// Plays a uniformly random legal action.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    player: PlayerId,
    rng: GameRng,
}

impl RandomAgent {
    pub fn new(player: PlayerId, rng: GameRng) -> Self {
        Self { player, rng }
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn step(&mut self, state: &S) -> Result<Action> {
        let actions = state.legal_actions();
        self.rng
            .choose(&actions)
            .copied()
            .ok_or(SimError::NoLegalActions {
                player: self.player,
            })
    }

    fn name(&self) -> &str {
        "RandomAgent"
    }
}

// =============================================================================
// First legal
// =============================================================================

/// Plays the first legal action in the game's enumeration order.
#[derive(Clone, Debug)]
pub struct FirstLegalAgent {
    player: PlayerId,
}

impl FirstLegalAgent {
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }
}

impl<S: GameState> Agent<S> for FirstLegalAgent {
    fn step(&mut self, state: &S) -> Result<Action> {
        state
            .legal_actions()
            .first()
            .copied()
            .ok_or(SimError::NoLegalActions {
                player: self.player,
            })
    }

    fn name(&self) -> &str {
        "FirstLegalAgent"
    }
}
