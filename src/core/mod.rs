//! Core types: players, actions, history, RNG, configuration, errors.
//!
//! Everything here is game-agnostic. Games and agents build on these types
//! but never extend them.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, History};
pub use config::{GameParams, ParamValue, SessionConfig};
pub use error::{Result, SimError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
