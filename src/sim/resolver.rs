//! Map human-readable action labels back to legal actions.

use crate::core::{Action, Result, SimError};
use crate::rules::GameState;

/// Find the legal action whose label, as seen by the current player, equals
/// `label`.
///
/// Scans `legal_actions()` in the game's order and returns the first match.
/// A label that matches nothing is `ActionNotFound`, never a silent no-op.
pub fn resolve_action<S: GameState>(state: &S, label: &str) -> Result<Action> {
    let player = state.current_player();

    state
        .legal_actions()
        .into_iter()
        .find(|&action| state.action_to_string(player, action) == label)
        .ok_or_else(|| SimError::ActionNotFound {
            label: label.to_string(),
        })
}
