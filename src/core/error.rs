//! Error type shared by the driver, the games and the agent factory.
//!
//! Every variant is fatal for the session that raised it. The library only
//! returns these; deciding to exit the process is left to the caller.

use thiserror::Error;

use super::action::Action;
use super::player::PlayerId;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Invalid action: {label}")]
    ActionNotFound { label: String },

    #[error("Game cannot have simultaneous nodes")]
    UnsupportedGameMode,

    #[error("Malformed chance distribution: {reason}")]
    MalformedChanceDistribution { reason: String },

    #[error("{player} chose {action}, which is not a legal action")]
    IllegalAction { player: PlayerId, action: Action },

    #[error("No agent is seated for {player}")]
    NoAgent { player: PlayerId },

    #[error("{player} has no legal actions")]
    NoLegalActions { player: PlayerId },

    #[error("Expected {expected} agents, got {actual}")]
    AgentCountMismatch { expected: usize, actual: usize },

    #[error("Expected {expected} returns at terminal, got {actual}")]
    ReturnsMismatch { expected: usize, actual: usize },

    #[error("Invalid game parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Unknown game: {0}")]
    UnknownGame(String),

    #[error("Unknown agent kind: {0}")]
    UnknownAgent(String),

    #[error("Replay diverged: recorded returns [{expected}], replayed [{actual}]")]
    ReplayDiverged { expected: String, actual: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session record error: {0}")]
    Record(#[from] bincode::Error),
}

impl SimError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        SimError::MalformedChanceDistribution {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_param(name: impl Into<String>, reason: impl Into<String>) -> Self {
        SimError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SimError::ActionNotFound { label: "a1".into() };
        assert_eq!(err.to_string(), "Invalid action: a1");

        let err = SimError::IllegalAction {
            player: PlayerId::new(1),
            action: Action::new(9),
        };
        assert_eq!(err.to_string(), "Player 1 chose #9, which is not a legal action");

        let err = SimError::malformed("weights sum to zero");
        assert_eq!(err.to_string(), "Malformed chance distribution: weights sum to zero");
    }
}
