//! Shared test fixtures: a scripted game and agents that record what the
//! driver tells them.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use turnloop::{Action, Agent, GameState, PlayerId, PlayerMap, Result};

/// One node of a scripted game.
#[derive(Clone, Debug)]
pub enum Node {
    /// `player` chooses among actions `0..count`.
    Decision { player: PlayerId, count: u32 },
    /// A chance node with the given outcome table.
    Chance { actions: Vec<Action>, weights: Vec<f64> },
    /// A node the driver must refuse.
    Simultaneous,
}

impl Node {
    pub fn decision(player: u8, count: u32) -> Self {
        Node::Decision {
            player: PlayerId::new(player),
            count,
        }
    }

    /// Chance node over actions `0..weights.len()`.
    pub fn chance(weights: &[f64]) -> Self {
        Node::Chance {
            actions: (0..weights.len() as u32).map(Action::new).collect(),
            weights: weights.to_vec(),
        }
    }
}

/// A game that walks a fixed list of nodes, one per ply, regardless of the
/// actions taken. Labels are `p<seat>:<id>` at decision nodes and `c<id>` at
/// chance nodes.
#[derive(Clone, Debug)]
pub struct ScriptedState {
    players: usize,
    script: Vec<Node>,
    taken: Vec<Action>,
    returns: Vec<f64>,
}

impl ScriptedState {
    pub fn new(players: usize, script: Vec<Node>) -> Self {
        Self {
            players,
            script,
            taken: Vec::new(),
            returns: vec![0.0; players],
        }
    }

    pub fn with_returns(mut self, returns: Vec<f64>) -> Self {
        self.returns = returns;
        self
    }

    pub fn ply(&self) -> usize {
        self.taken.len()
    }

    pub fn taken(&self) -> &[Action] {
        &self.taken
    }

    fn node(&self) -> Option<&Node> {
        self.script.get(self.taken.len())
    }
}

impl GameState for ScriptedState {
    fn num_players(&self) -> usize {
        self.players
    }

    fn is_terminal(&self) -> bool {
        self.node().is_none()
    }

    fn is_chance_node(&self) -> bool {
        matches!(self.node(), Some(Node::Chance { .. }))
    }

    fn is_simultaneous_node(&self) -> bool {
        matches!(self.node(), Some(Node::Simultaneous))
    }

    fn current_player(&self) -> PlayerId {
        match self.node() {
            None => PlayerId::TERMINAL,
            Some(Node::Decision { player, .. }) => *player,
            Some(Node::Chance { .. }) => PlayerId::CHANCE,
            Some(Node::Simultaneous) => PlayerId::new(0),
        }
    }

    fn legal_actions(&self) -> Vec<Action> {
        match self.node() {
            Some(Node::Decision { count, .. }) => (0..*count).map(Action::new).collect(),
            Some(Node::Chance { actions, .. }) => actions.clone(),
            _ => Vec::new(),
        }
    }

    fn action_to_string(&self, player: PlayerId, action: Action) -> String {
        if player == PlayerId::CHANCE {
            format!("c{}", action.id())
        } else {
            format!("p{}:{}", player.index(), action.id())
        }
    }

    fn chance_outcomes(&self) -> Vec<(Action, f64)> {
        match self.node() {
            Some(Node::Chance { actions, weights }) => actions
                .iter()
                .copied()
                .zip(weights.iter().copied())
                .collect(),
            _ => Vec::new(),
        }
    }

    fn apply_action(&mut self, action: Action) {
        self.taken.push(action);
    }

    fn returns(&self) -> PlayerMap<f64> {
        PlayerMap::from(self.returns.clone())
    }
}

impl std::fmt::Display for ScriptedState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ply {}", self.ply())
    }
}

/// Something the driver did to an agent.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// `seat` was asked to move at `ply`.
    Step { seat: usize, ply: usize },
    /// `seat` was told `player` takes `action`, seen at `ply`.
    Informed {
        seat: usize,
        player: PlayerId,
        action: Action,
        ply: usize,
    },
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// Plays a fixed list of choices (then the first legal action) and logs
/// every call into a log shared by all seats.
pub struct RecordingAgent {
    seat: usize,
    choices: Vec<Action>,
    log: EventLog,
}

impl RecordingAgent {
    pub fn new(seat: usize, log: &EventLog) -> Self {
        Self {
            seat,
            choices: Vec::new(),
            log: Rc::clone(log),
        }
    }

    pub fn with_choices(mut self, choices: &[u32]) -> Self {
        self.choices = choices.iter().rev().copied().map(Action::new).collect();
        self
    }
}

impl Agent<ScriptedState> for RecordingAgent {
    fn step(&mut self, state: &ScriptedState) -> Result<Action> {
        self.log.borrow_mut().push(Event::Step {
            seat: self.seat,
            ply: state.ply(),
        });
        Ok(self
            .choices
            .pop()
            .unwrap_or_else(|| state.legal_actions()[0]))
    }

    fn inform_action(&mut self, state: &ScriptedState, player: PlayerId, action: Action) {
        self.log.borrow_mut().push(Event::Informed {
            seat: self.seat,
            player,
            action,
            ply: state.ply(),
        });
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// One recording agent per seat, sharing a fresh log.
pub fn recording_agents(players: usize) -> (Vec<Box<dyn Agent<ScriptedState>>>, EventLog) {
    let log = EventLog::default();
    let agents = (0..players)
        .map(|seat| Box::new(RecordingAgent::new(seat, &log)) as Box<dyn Agent<ScriptedState>>)
        .collect();
    (agents, log)
}

pub fn labels(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}
