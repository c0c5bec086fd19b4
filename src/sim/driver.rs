//! The simulation driver.
//!
//! Owns one game state and one agent per seat for the lifetime of a
//! session and advances the state until it is terminal:
//!
//! 1. Forced opening: resolve each label against the live state, notify
//!    every agent, apply.
//! 2. Main loop: sample at chance nodes, ask the seated agent at decision
//!    nodes, notify every other agent, apply.
//! 3. Read the returns.
//!
//! Exactly one action is applied per iteration and every notification for
//! that action happens before the state changes. Any error ends the
//! session; there are no partial outcomes.

use crate::agents::{create_agents, Agent};
use crate::core::{Action, GameRng, History, PlayerId, PlayerMap, Result, SessionConfig, SimError};
use crate::rules::{Game, GameState};

use super::resolver::resolve_action;
use super::sampler::{ChanceSampler, WeightedSampler};

/// Final result of a completed session.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// One label per applied action, forced openings included.
    pub history: History,

    /// One payoff per player.
    pub returns: PlayerMap<f64>,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Returns: {} , Game actions: {}", self.returns, self.history)
    }
}

/// Drives one session of one game.
pub struct SimulationDriver<S: GameState, C: ChanceSampler = WeightedSampler> {
    state: S,
    agents: Vec<Box<dyn Agent<S>>>,
    sampler: C,
    history: History,
    quiet: bool,
}

impl<S: GameState, C: ChanceSampler> SimulationDriver<S, C> {
    /// Take ownership of the initial state and one agent per seat.
    pub fn new(state: S, agents: Vec<Box<dyn Agent<S>>>, sampler: C) -> Result<Self> {
        if agents.len() != state.num_players() {
            return Err(SimError::AgentCountMismatch {
                expected: state.num_players(),
                actual: agents.len(),
            });
        }

        Ok(Self {
            state,
            agents,
            sampler,
            history: History::new(),
            quiet: false,
        })
    }

    /// Suppress progress reporting.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Apply forced-opening labels in order.
    ///
    /// Each label is resolved against the state as it is when the label is
    /// reached. Every agent, including the one for the acting seat, is told
    /// about each forced action before it is applied.
    pub fn apply_forced_opening(&mut self, labels: &[String]) -> Result<()> {
        for label in labels {
            let action = resolve_action(&self.state, label)?;
            let player = self.state.current_player();

            for agent in &mut self.agents {
                agent.inform_action(&self.state, player, action);
            }
            self.apply(action, label.clone());

            self.report(format_args!("Forced action {}", label));
            self.report(format_args!("Next state:\n{}", self.state));
        }

        Ok(())
    }

    /// Run one main-loop iteration.
    ///
    /// Returns `Ok(false)` without doing anything once the state is
    /// terminal.
    pub fn step(&mut self) -> Result<bool> {
        if self.state.is_terminal() {
            return Ok(false);
        }

        let player = self.state.current_player();

        let action = if self.state.is_chance_node() {
            let (actions, weights): (Vec<_>, Vec<_>) =
                self.state.chance_outcomes().into_iter().unzip();
            self.report(format_args!("Chance node, got {} outcomes", actions.len()));

            let action = self.sampler.sample(&actions, &weights)?;
            self.report(format_args!(
                "Sampled action: {}",
                self.state.action_to_string(player, action)
            ));
            action
        } else if self.state.is_simultaneous_node() {
            return Err(SimError::UnsupportedGameMode);
        } else {
            let agent = self
                .agents
                .get_mut(player.index())
                .ok_or(SimError::NoAgent { player })?;

            let action = agent.step(&self.state)?;
            if !self.state.is_legal(action) {
                return Err(SimError::IllegalAction { player, action });
            }
            self.report(format_args!(
                "{} sampled action: {}",
                player,
                self.state.action_to_string(player, action)
            ));
            action
        };

        self.notify_others(player, action);

        let label = self.state.action_to_string(player, action);
        self.apply(action, label);
        self.report(format_args!("Next state:\n{}", self.state));

        Ok(true)
    }

    /// Play the main loop to the end and collect the outcome.
    pub fn finish(mut self) -> Result<Outcome> {
        while self.step()? {}

        let returns = self.state.returns();
        if returns.player_count() != self.state.num_players() {
            return Err(SimError::ReturnsMismatch {
                expected: self.state.num_players(),
                actual: returns.player_count(),
            });
        }

        log::debug!("session over after {} actions", self.history.len());

        Ok(Outcome {
            history: self.history,
            returns,
        })
    }

    /// Forced opening, main loop, returns.
    pub fn run(mut self, forced_opening: &[String]) -> Result<Outcome> {
        self.report(format_args!("Initial state:\n{}", self.state));
        self.apply_forced_opening(forced_opening)?;
        self.finish()
    }

    /// Notify every agent except the acting seat, in seat order.
    ///
    /// At chance nodes `player` is the chance sentinel, which matches no
    /// seat, so every agent is notified.
    fn notify_others(&mut self, player: PlayerId, action: Action) {
        for (seat, agent) in self.agents.iter_mut().enumerate() {
            if seat != player.index() {
                agent.inform_action(&self.state, player, action);
            }
        }
    }

    fn apply(&mut self, action: Action, label: String) {
        log::trace!("ply {}: {} ({})", self.history.len(), label, action);
        self.state.apply_action(action);
        self.history.push(label);
    }

    fn report(&self, args: std::fmt::Arguments<'_>) {
        if !self.quiet {
            log::info!("{}", args);
        }
    }
}

/// Run a full session with the default weighted chance sampler.
///
/// Chance outcomes draw from the `chance` stream of `config.seed`.
pub fn run<S: GameState>(
    state: S,
    agents: Vec<Box<dyn Agent<S>>>,
    forced_opening: &[String],
    config: &SessionConfig,
) -> Result<Outcome> {
    let sampler = WeightedSampler::new(GameRng::new(config.seed).for_context("chance"));

    SimulationDriver::new(state, agents, sampler)?
        .with_quiet(config.quiet)
        .run(forced_opening)
}

/// Play one session of `game` with the agents and opening `config` asks for.
///
/// The opening is generated from the `opening` stream of the seed, agents
/// from their own `agent-<seat>` streams, chance from the `chance` stream.
/// Seats without a spec get the default agent; specs for seats the game
/// doesn't have are an error.
pub fn play<G: Game>(game: &G, config: &SessionConfig) -> Result<Outcome> {
    if config.agents.len() > game.num_players() {
        return Err(SimError::AgentCountMismatch {
            expected: game.num_players(),
            actual: config.agents.len(),
        });
    }

    let rng = GameRng::new(config.seed);
    let state = game.new_initial_state();

    let labels = config
        .opening
        .labels(&state, &mut rng.for_context("opening"))?;
    let agents = create_agents(|seat| config.agent_for(seat), game, &rng)?;

    log::debug!(
        "{} with {} players, seed {}, {} forced actions",
        game.name(),
        game.num_players(),
        config.seed,
        labels.len()
    );

    run(state, agents, &labels, config)
}
