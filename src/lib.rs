//! # turnloop
//!
//! A game-agnostic driver for turn-based extensive-form games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The driver only talks to the `GameState` trait.
//!    Node kinds, legal actions, labels and returns all come from the game.
//!
//! 2. **N-Player First**: One agent per seat, any number of seats. Chance
//!    nodes report a sentinel player that matches no seat.
//!
//! 3. **Explicit Configuration**: Sessions take a `SessionConfig` value;
//!    randomness flows from its seed through named `GameRng` streams.
//!
//! 4. **Errors, Not Exits**: Every fatal condition is a `SimError`. Only the
//!    binary decides to terminate the process.
//!
//! ## Modules
//!
//! - `core`: Players, actions, history, RNG, configuration, errors
//! - `rules`: `Game` and `GameState` traits
//! - `agents`: `Agent` trait and built-in agents
//! - `sim`: Action resolution, chance sampling, forced openings, the driver
//! - `games`: Built-in games (breakthrough, pig)

pub mod agents;
pub mod core;
pub mod games;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Action, GameParams, GameRng, History, ParamValue, PlayerId, PlayerMap, Result,
    SessionConfig, SimError,
};

pub use crate::rules::{Game, GameState};

pub use crate::agents::{create_agent, create_agents, Agent, AgentKind, AgentSpec};

pub use crate::sim::{
    play, resolve_action, run, ChanceSampler, OpeningSpec, Outcome, SessionRecord, SimulationDriver,
    WeightedSampler,
};

pub use crate::games::GameKind;
