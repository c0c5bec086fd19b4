//! Game and game-state traits.
//!
//! Games implement these to plug into the driver:
//! - What kind of node the state is (chance, decision, terminal)
//! - What actions are legal and how they read to a human
//! - How an action transforms the state
//! - Final payoffs

use crate::core::{Action, PlayerId, PlayerMap};

/// A game definition: a factory for initial states.
pub trait Game {
    type State: GameState;

    /// Short identifier (e.g. `"breakthrough"`).
    fn name(&self) -> &str;

    fn num_players(&self) -> usize;

    fn new_initial_state(&self) -> Self::State;
}

/// One position of an extensive-form game.
///
/// ## Implementation Notes
///
/// - `current_player`: the seat to move at decision nodes,
///   `PlayerId::CHANCE` at chance nodes, `PlayerId::TERMINAL` once over
/// - `legal_actions`: at chance nodes, the chance outcomes in the same order
///   as `chance_outcomes`; empty at terminal nodes
/// - `action_to_string`: must be unique among one state's legal actions so
///   labels can be resolved back to actions
/// - `returns`: only called on terminal states; one entry per player
/// - `Display`: a human-readable snapshot used in progress reports
pub trait GameState: Clone + std::fmt::Display {
    fn num_players(&self) -> usize;

    fn is_terminal(&self) -> bool;

    fn is_chance_node(&self) -> bool;

    /// No supported game produces simultaneous nodes; the driver rejects them.
    fn is_simultaneous_node(&self) -> bool {
        false
    }

    fn current_player(&self) -> PlayerId;

    fn legal_actions(&self) -> Vec<Action>;

    fn action_to_string(&self, player: PlayerId, action: Action) -> String;

    /// Outcome distribution at a chance node, as (action, weight) pairs.
    ///
    /// Weights are used as sampling weights and need not be normalised.
    /// Empty at non-chance nodes.
    fn chance_outcomes(&self) -> Vec<(Action, f64)>;

    /// Apply a legal action. Behaviour for illegal actions is up to the game.
    fn apply_action(&mut self, action: Action);

    fn returns(&self) -> PlayerMap<f64>;

    /// Whether `action` is currently legal.
    fn is_legal(&self, action: Action) -> bool {
        self.legal_actions().contains(&action)
    }
}
