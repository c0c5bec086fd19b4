//! Built-in games.
//!
//! - `breakthrough`: two-player race/capture board game, no chance
//! - `pig`: N-player dice game with chance nodes

pub mod breakthrough;
pub mod pig;

pub use breakthrough::{Breakthrough, BreakthroughState};
pub use pig::{Pig, PigState};

use std::str::FromStr;

use crate::core::{GameParams, Result, SimError};

/// Built-in game identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKind {
    Breakthrough,
    Pig,
}

impl GameKind {
    pub fn name(self) -> &'static str {
        match self {
            GameKind::Breakthrough => Breakthrough::NAME,
            GameKind::Pig => Pig::NAME,
        }
    }

    /// Parameters used when none are given. Breakthrough defaults to the
    /// small 5x5 board.
    pub fn default_params(self) -> GameParams {
        match self {
            GameKind::Breakthrough => GameParams::new().with("rows", 5).with("columns", 5),
            GameKind::Pig => GameParams::new(),
        }
    }
}

impl FromStr for GameKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            Breakthrough::NAME => Ok(GameKind::Breakthrough),
            Pig::NAME => Ok(GameKind::Pig),
            other => Err(SimError::UnknownGame(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_kind_from_str() {
        assert_eq!("breakthrough".parse::<GameKind>().unwrap(), GameKind::Breakthrough);
        assert_eq!("pig".parse::<GameKind>().unwrap(), GameKind::Pig);
        assert!(matches!(
            "chess".parse::<GameKind>(),
            Err(SimError::UnknownGame(ref g)) if g == "chess"
        ));
    }

    #[test]
    fn test_default_params_build() {
        let params = GameKind::Breakthrough.default_params();
        let game = Breakthrough::from_params(&params).unwrap();
        assert_eq!((game.rows(), game.columns()), (5, 5));
        assert!(Pig::from_params(&GameKind::Pig.default_params()).is_ok());
    }
}
