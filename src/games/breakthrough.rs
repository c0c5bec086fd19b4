//! Breakthrough.
//!
//! Two players on a `rows x columns` board. Player 0 (`b`) starts on the top
//! two rows and moves down; player 1 (`w`) starts on the bottom two rows and
//! moves up. A piece steps one square forward onto an empty square, or one
//! square diagonally forward onto an empty or enemy square (capturing). The
//! first player to reach the far row, or to capture every enemy piece, wins.
//!
//! Labels use algebraic coordinates (column letter, row number counted from
//! the bottom) with a `*` suffix for captures: `a4a3`, `b4c3*`.

use crate::core::{Action, GameParams, PlayerId, PlayerMap, Result};
use crate::rules::{Game, GameState};

const BLACK: PlayerId = PlayerId(0);
const WHITE: PlayerId = PlayerId(1);

/// Diagonal-left, straight, diagonal-right.
const DIRECTIONS: usize = 3;

/// Game definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breakthrough {
    rows: usize,
    columns: usize,
}

impl Breakthrough {
    pub const NAME: &'static str = "breakthrough";
    pub const PARAMS: [&'static str; 2] = ["rows", "columns"];

    /// Panics on boards the rules cannot be played on; use
    /// [`Breakthrough::from_params`] for untrusted input.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!((4..=26).contains(&rows), "rows must be 4-26");
        assert!((2..=26).contains(&columns), "columns must be 2-26");
        Self { rows, columns }
    }

    /// Build from `rows` / `columns` parameters (both default to 8).
    pub fn from_params(params: &GameParams) -> Result<Self> {
        params.ensure_known(&Self::PARAMS)?;
        let rows = params.get_int_in("rows", 8, 4, 26)?;
        let columns = params.get_int_in("columns", 8, 2, 26)?;
        Ok(Self::new(rows as usize, columns as usize))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl Game for Breakthrough {
    type State = BreakthroughState;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn num_players(&self) -> usize {
        2
    }

    fn new_initial_state(&self) -> BreakthroughState {
        BreakthroughState::new(self.rows, self.columns)
    }
}

/// A breakthrough position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakthroughState {
    rows: usize,
    columns: usize,
    board: Vec<Option<PlayerId>>,
    to_move: PlayerId,
    pieces: [usize; 2],
    winner: Option<PlayerId>,
}

impl BreakthroughState {
    fn new(rows: usize, columns: usize) -> Self {
        let board = (0..rows * columns)
            .map(|square| match square / columns {
                r if r < 2 => Some(BLACK),
                r if r >= rows - 2 => Some(WHITE),
                _ => None,
            })
            .collect();

        Self {
            rows,
            columns,
            board,
            to_move: BLACK,
            pieces: [2 * columns, 2 * columns],
            winner: None,
        }
    }

    /// Piece on a square, `(row, column)` from the top-left.
    pub fn piece_at(&self, row: usize, column: usize) -> Option<PlayerId> {
        self.board[row * self.columns + column]
    }

    /// Pieces left for a player.
    pub fn piece_count(&self, player: PlayerId) -> usize {
        self.pieces[player.index()]
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    fn opponent(player: PlayerId) -> PlayerId {
        if player == BLACK {
            WHITE
        } else {
            BLACK
        }
    }

    fn goal_row(&self, player: PlayerId) -> usize {
        if player == BLACK {
            self.rows - 1
        } else {
            0
        }
    }

    /// Destination of `action`, or `None` if it leaves the board.
    fn destination(&self, action: Action) -> Option<(usize, usize, usize)> {
        let id = action.id() as usize;
        let from = id / DIRECTIONS;
        if from >= self.board.len() {
            return None;
        }
        let (row, column) = (from / self.columns, from % self.columns);
        let owner = self.board[from]?;

        let to_row = if owner == BLACK {
            row + 1
        } else {
            row.checked_sub(1)?
        };
        let to_column = (column + id % DIRECTIONS).checked_sub(1)?;
        if to_row >= self.rows || to_column >= self.columns {
            return None;
        }
        Some((from, to_row, to_column))
    }

    fn square_label(&self, row: usize, column: usize) -> String {
        format!("{}{}", (b'a' + column as u8) as char, self.rows - row)
    }
}

impl GameState for BreakthroughState {
    fn num_players(&self) -> usize {
        2
    }

    fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    fn is_chance_node(&self) -> bool {
        false
    }

    fn current_player(&self) -> PlayerId {
        if self.is_terminal() {
            PlayerId::TERMINAL
        } else {
            self.to_move
        }
    }

    fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            return Vec::new();
        }

        let mover = self.to_move;
        let mut actions = Vec::new();

        for (square, cell) in self.board.iter().enumerate() {
            if *cell != Some(mover) {
                continue;
            }
            for direction in 0..DIRECTIONS {
                let action = Action::new((square * DIRECTIONS + direction) as u32);
                let Some((_, to_row, to_column)) = self.destination(action) else {
                    continue;
                };
                let target = self.piece_at(to_row, to_column);
                let straight = direction == 1;
                let allowed = match target {
                    None => true,
                    Some(p) => !straight && p != mover,
                };
                if allowed {
                    actions.push(action);
                }
            }
        }

        actions
    }

    fn action_to_string(&self, _player: PlayerId, action: Action) -> String {
        match self.destination(action) {
            Some((from, to_row, to_column)) => {
                let capture = self.piece_at(to_row, to_column).is_some();
                format!(
                    "{}{}{}",
                    self.square_label(from / self.columns, from % self.columns),
                    self.square_label(to_row, to_column),
                    if capture { "*" } else { "" }
                )
            }
            None => format!("invalid {}", action),
        }
    }

    fn chance_outcomes(&self) -> Vec<(Action, f64)> {
        Vec::new()
    }

    fn apply_action(&mut self, action: Action) {
        debug_assert!(self.is_legal(action), "illegal breakthrough action {}", action);
        let Some((from, to_row, to_column)) = self.destination(action) else {
            return;
        };

        let mover = self.to_move;
        let opponent = Self::opponent(mover);
        let to = to_row * self.columns + to_column;

        if self.board[to] == Some(opponent) {
            self.pieces[opponent.index()] -= 1;
        }
        self.board[to] = Some(mover);
        self.board[from] = None;

        if to_row == self.goal_row(mover) || self.pieces[opponent.index()] == 0 {
            self.winner = Some(mover);
        }
        self.to_move = opponent;
    }

    fn returns(&self) -> PlayerMap<f64> {
        PlayerMap::new(2, |p| match self.winner {
            Some(w) if w == p => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        })
    }
}

impl std::fmt::Display for BreakthroughState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            write!(f, "{:>2} ", self.rows - row)?;
            for column in 0..self.columns {
                let c = match self.piece_at(row, column) {
                    Some(BLACK) => 'b',
                    Some(_) => 'w',
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for column in 0..self.columns {
            write!(f, "{}", (b'a' + column as u8) as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::resolve_action;

    fn play(state: &mut BreakthroughState, label: &str) {
        let action = resolve_action(state, label).unwrap();
        state.apply_action(action);
    }

    #[test]
    fn test_initial_position() {
        let state = Breakthrough::new(5, 5).new_initial_state();

        assert_eq!(state.current_player(), BLACK);
        assert_eq!(state.piece_count(BLACK), 10);
        assert_eq!(state.piece_count(WHITE), 10);
        assert_eq!(state.piece_at(0, 0), Some(BLACK));
        assert_eq!(state.piece_at(2, 0), None);
        assert_eq!(state.piece_at(4, 4), Some(WHITE));
        assert_eq!(
            state.to_string(),
            " 5 bbbbb\n 4 bbbbb\n 3 .....\n 2 wwwww\n 1 wwwww\n   abcde"
        );
    }

    #[test]
    fn test_opening_moves() {
        let state = Breakthrough::new(5, 5).new_initial_state();
        let labels: Vec<_> = state
            .legal_actions()
            .into_iter()
            .map(|a| state.action_to_string(BLACK, a))
            .collect();

        // Only the front row can move: 5 pieces, corner pieces have 2 moves
        assert_eq!(labels.len(), 13);
        assert_eq!(&labels[..3], &["a4a3", "a4b3", "b4a3"]);
        assert!(labels.iter().all(|l| !l.ends_with('*')));
    }

    #[test]
    fn test_no_straight_capture() {
        let mut state = Breakthrough::new(5, 5).new_initial_state();
        play(&mut state, "a4a3");

        // a2 faces a black piece on a3; it cannot move straight into it
        assert!(resolve_action(&state, "a2a3").is_err());
        assert!(resolve_action(&state, "b2a3*").is_ok());
    }

    #[test]
    fn test_capture_reduces_pieces() {
        let mut state = Breakthrough::new(5, 5).new_initial_state();
        play(&mut state, "a4a3");
        play(&mut state, "b2a3*");

        assert_eq!(state.piece_count(BLACK), 9);
        assert_eq!(state.piece_at(2, 0), Some(WHITE));
        assert_eq!(state.current_player(), BLACK);
    }

    #[test]
    fn test_terminal_returns() {
        let mut state = Breakthrough::new(4, 2).new_initial_state();
        // Black's front piece captures, then walks to the far row
        play(&mut state, "a3b2*");
        play(&mut state, "a2b3*");
        play(&mut state, "b2a1*");

        assert!(state.is_terminal());
        assert_eq!(state.winner(), Some(BLACK));
        assert_eq!(state.current_player(), PlayerId::TERMINAL);
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.returns().as_slice(), &[1.0, -1.0]);
    }

    #[test]
    fn test_from_params() {
        let params = GameParams::new().with("rows", 5).with("columns", 6);
        let game = Breakthrough::from_params(&params).unwrap();
        assert_eq!((game.rows(), game.columns()), (5, 6));

        let game = Breakthrough::from_params(&GameParams::new()).unwrap();
        assert_eq!((game.rows(), game.columns()), (8, 8));

        assert!(Breakthrough::from_params(&GameParams::new().with("rows", 3)).is_err());
        assert!(Breakthrough::from_params(&GameParams::new().with("depth", 3)).is_err());
    }
}
