//! Pig, a dice game with chance nodes.
//!
//! On their turn a player repeatedly chooses `roll` or `stop`. A roll is a
//! chance node over the die faces: a `1` loses the turn total and passes the
//! turn, any other face adds to it. `stop` banks the turn total and passes.
//! The first player whose banked score plus turn total reaches `winscore`
//! wins immediately. After `horizon` turns without a winner the game ends
//! with all returns zero.

use crate::core::{Action, GameParams, PlayerId, PlayerMap, Result};
use crate::rules::{Game, GameState};

pub const ROLL: Action = Action(0);
pub const STOP: Action = Action(1);

/// Game definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pig {
    players: usize,
    winscore: u32,
    dice_outcomes: u32,
    horizon: u32,
}

impl Pig {
    pub const NAME: &'static str = "pig";
    pub const PARAMS: [&'static str; 4] = ["players", "winscore", "diceoutcomes", "horizon"];

    pub fn new(players: usize) -> Self {
        assert!((2..=10).contains(&players), "Player count must be 2-10");
        Self {
            players,
            winscore: 100,
            dice_outcomes: 6,
            horizon: 1000,
        }
    }

    pub fn with_winscore(mut self, winscore: u32) -> Self {
        assert!(winscore > 0, "winscore must be positive");
        self.winscore = winscore;
        self
    }

    pub fn with_dice_outcomes(mut self, faces: u32) -> Self {
        assert!(faces >= 2, "die needs at least 2 faces");
        self.dice_outcomes = faces;
        self
    }

    pub fn with_horizon(mut self, horizon: u32) -> Self {
        assert!(horizon > 0, "horizon must be positive");
        self.horizon = horizon;
        self
    }

    /// Build from `players`, `winscore`, `diceoutcomes` and `horizon`.
    pub fn from_params(params: &GameParams) -> Result<Self> {
        params.ensure_known(&Self::PARAMS)?;
        let players = params.get_int_in("players", 2, 2, 10)?;
        let winscore = params.get_int_in("winscore", 100, 1, 10_000)?;
        let faces = params.get_int_in("diceoutcomes", 6, 2, 100)?;
        let horizon = params.get_int_in("horizon", 1000, 1, 1_000_000)?;

        Ok(Self::new(players as usize)
            .with_winscore(winscore as u32)
            .with_dice_outcomes(faces as u32)
            .with_horizon(horizon as u32))
    }
}

impl Game for Pig {
    type State = PigState;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn num_players(&self) -> usize {
        self.players
    }

    fn new_initial_state(&self) -> PigState {
        PigState {
            game: self.clone(),
            scores: vec![0; self.players],
            turn_total: 0,
            to_move: PlayerId::new(0),
            rolling: false,
            turns: 0,
            winner: None,
        }
    }
}

/// A pig position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PigState {
    game: Pig,
    scores: Vec<u32>,
    turn_total: u32,
    to_move: PlayerId,
    /// A roll was chosen and the die has not landed yet.
    rolling: bool,
    turns: u32,
    winner: Option<PlayerId>,
}

impl PigState {
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player.index()]
    }

    pub fn turn_total(&self) -> u32 {
        self.turn_total
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    fn pass_turn(&mut self) {
        self.turn_total = 0;
        self.to_move = PlayerId::new(((self.to_move.index() + 1) % self.game.players) as u8);
        self.turns += 1;
    }

    fn bank_if_won(&mut self) -> bool {
        let mover = self.to_move.index();
        if self.scores[mover] + self.turn_total >= self.game.winscore {
            self.scores[mover] += self.turn_total;
            self.turn_total = 0;
            self.winner = Some(self.to_move);
            true
        } else {
            false
        }
    }
}

impl GameState for PigState {
    fn num_players(&self) -> usize {
        self.game.players
    }

    fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.turns >= self.game.horizon
    }

    fn is_chance_node(&self) -> bool {
        !self.is_terminal() && self.rolling
    }

    fn current_player(&self) -> PlayerId {
        if self.is_terminal() {
            PlayerId::TERMINAL
        } else if self.rolling {
            PlayerId::CHANCE
        } else {
            self.to_move
        }
    }

    fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            Vec::new()
        } else if self.rolling {
            (0..self.game.dice_outcomes).map(Action::new).collect()
        } else {
            vec![ROLL, STOP]
        }
    }

    fn action_to_string(&self, player: PlayerId, action: Action) -> String {
        if player == PlayerId::CHANCE {
            format!("chance outcome {}", action.id() + 1)
        } else if action == ROLL {
            "roll".to_string()
        } else if action == STOP {
            "stop".to_string()
        } else {
            format!("invalid {}", action)
        }
    }

    fn chance_outcomes(&self) -> Vec<(Action, f64)> {
        if !self.is_chance_node() {
            return Vec::new();
        }
        let p = 1.0 / self.game.dice_outcomes as f64;
        (0..self.game.dice_outcomes)
            .map(|face| (Action::new(face), p))
            .collect()
    }

    fn apply_action(&mut self, action: Action) {
        debug_assert!(self.is_legal(action), "illegal pig action {}", action);

        if self.rolling {
            self.rolling = false;
            let face = action.id() + 1;
            if face == 1 {
                self.pass_turn();
            } else {
                self.turn_total += face;
                self.bank_if_won();
            }
        } else if action == ROLL {
            self.rolling = true;
        } else {
            let mover = self.to_move.index();
            self.scores[mover] += self.turn_total;
            self.turn_total = 0;
            if !self.bank_if_won() {
                self.pass_turn();
            }
        }
    }

    fn returns(&self) -> PlayerMap<f64> {
        let n = self.game.players;
        PlayerMap::new(n, |p| match self.winner {
            Some(w) if w == p => 1.0,
            Some(_) => -1.0 / (n - 1) as f64,
            None => 0.0,
        })
    }
}

impl std::fmt::Display for PigState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scores:")?;
        for score in &self.scores {
            write!(f, " {}", score)?;
        }
        write!(
            f,
            ", turn total: {}, to move: {}{}",
            self.turn_total,
            self.to_move,
            if self.rolling { " (rolling)" } else { "" }
        )
    }
}
