//! Agent trait and construction.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::core::{Action, GameRng, PlayerId, Result, SimError};
use crate::rules::{Game, GameState};

use super::builtin::{FirstLegalAgent, RandomAgent};

/// A decision maker for one seat.
///
/// Agents may keep memory across a session; the driver calls them strictly
/// in turn and never concurrently.
pub trait Agent<S: GameState> {
    /// Choose an action at a decision node where this agent's seat is to move.
    fn step(&mut self, state: &S) -> Result<Action>;

    /// Observe an action about to be applied by `player` (possibly the
    /// chance sentinel). Called before the state is mutated.
    fn inform_action(&mut self, _state: &S, _player: PlayerId, _action: Action) {}

    fn name(&self) -> &str;
}

/// Built-in agent kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentKind {
    /// Uniformly random legal action.
    #[default]
    Random,
    /// Always the first legal action.
    First,
}

impl FromStr for AgentKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "random" => Ok(AgentKind::Random),
            "first" => Ok(AgentKind::First),
            other => Err(SimError::UnknownAgent(other.to_string())),
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentKind::Random => write!(f, "random"),
            AgentKind::First => write!(f, "first"),
        }
    }
}

/// How to build the agent for one seat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub kind: AgentKind,

    /// Location of pre-trained behaviour. `None` means default behaviour.
    pub checkpoint: Option<PathBuf>,
}

impl AgentSpec {
    pub fn new(kind: AgentKind) -> Self {
        Self {
            kind,
            checkpoint: None,
        }
    }

    pub fn with_checkpoint(mut self, checkpoint: impl Into<PathBuf>) -> Self {
        self.checkpoint = Some(checkpoint.into());
        self
    }
}

/// Build the agent for `player`.
///
/// `rng` is the session root; each agent draws from its own
/// `agent-<index>` stream of it.
pub fn create_agent<G: Game>(
    spec: &AgentSpec,
    player: PlayerId,
    game: &G,
    rng: &GameRng,
) -> Result<Box<dyn Agent<G::State>>> {
    if player.index() >= game.num_players() {
        return Err(SimError::AgentCountMismatch {
            expected: game.num_players(),
            actual: player.index() + 1,
        });
    }

    if let Some(path) = &spec.checkpoint {
        log::warn!(
            "{} agent for {} has no trained behaviour; ignoring checkpoint {}",
            spec.kind,
            player,
            path.display()
        );
    }

    log::debug!("{} plays {} in {}", player, spec.kind, game.name());

    let agent: Box<dyn Agent<G::State>> = match spec.kind {
        AgentKind::Random => {
            let stream = rng.for_context(&format!("agent-{}", player.index()));
            Box::new(RandomAgent::new(player, stream))
        }
        AgentKind::First => Box::new(FirstLegalAgent::new(player)),
    };

    Ok(agent)
}

/// Build one agent per seat from a session's agent specs.
pub fn create_agents<G: Game>(
    specs: impl Fn(usize) -> AgentSpec,
    game: &G,
    rng: &GameRng,
) -> Result<Vec<Box<dyn Agent<G::State>>>> {
    PlayerId::all(game.num_players())
        .map(|player| create_agent(&specs(player.index()), player, game, rng))
        .collect()
}
