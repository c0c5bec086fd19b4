//! Rules traits for game implementations.
//!
//! Games implement `Game` and `GameState` to define:
//! - How a session starts
//! - Node kinds, legal actions and their labels
//! - How actions modify state
//! - Final returns
//!
//! The driver calls into these traits but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{Game, GameState};
