//! Configuration values.
//!
//! - `GameParams`: named scalar parameters used once to construct a game
//!   (board size, number of players, ...).
//! - `SessionConfig`: everything else a session needs, passed explicitly to
//!   the driver. Nothing in the crate reads global state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::{Result, SimError};
use crate::agents::AgentSpec;
use crate::sim::OpeningSpec;

/// A scalar game parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl ParamValue {
    /// Parse a command-line value: integers first, then floats, then
    /// booleans, falling back to a string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Ok(v) = raw.parse::<i64>() {
            ParamValue::Int(v)
        } else if let Ok(v) = raw.parse::<f64>() {
            ParamValue::Float(v)
        } else if let Ok(v) = raw.parse::<bool>() {
            ParamValue::Bool(v)
        } else {
            ParamValue::Str(raw.to_string())
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ParamValue::Int(_) => "integer",
            ParamValue::Float(_) => "float",
            ParamValue::Bool(_) => "boolean",
            ParamValue::Str(_) => "string",
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Bool(v) => write!(f, "{}", v),
            ParamValue::Str(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

/// Named game parameters, kept in name order.
///
/// ```
/// use turnloop::core::GameParams;
///
/// let params = GameParams::new().with("rows", 5).with("columns", 6);
/// assert_eq!(params.get_int("rows", 8).unwrap(), 5);
/// assert_eq!(params.get_int("missing", 8).unwrap(), 8);
/// assert_eq!(params.to_string(), "columns=6,rows=5");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameParams {
    values: BTreeMap<String, ParamValue>,
}

impl GameParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Parse and insert a `name=value` assignment.
    pub fn insert_assignment(&mut self, assignment: &str) -> Result<()> {
        let (name, raw) = assignment
            .split_once('=')
            .ok_or_else(|| SimError::invalid_param(assignment, "expected name=value"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(SimError::invalid_param(assignment, "empty parameter name"));
        }
        self.insert(name, ParamValue::parse(raw.trim()));
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Integer parameter, or `default` when absent.
    pub fn get_int(&self, name: &str, default: i64) -> Result<i64> {
        match self.values.get(name) {
            None => Ok(default),
            Some(ParamValue::Int(v)) => Ok(*v),
            Some(other) => Err(SimError::invalid_param(
                name,
                format!("expected integer, got {} `{}`", other.kind(), other),
            )),
        }
    }

    /// Integer parameter constrained to `min..=max`.
    pub fn get_int_in(&self, name: &str, default: i64, min: i64, max: i64) -> Result<i64> {
        let value = self.get_int(name, default)?;
        if !(min..=max).contains(&value) {
            return Err(SimError::invalid_param(
                name,
                format!("{} is outside {}..={}", value, min, max),
            ));
        }
        Ok(value)
    }

    /// Reject any parameter the game does not recognise.
    pub fn ensure_known(&self, known: &[&str]) -> Result<()> {
        match self.values.keys().find(|k| !known.contains(&k.as_str())) {
            Some(unknown) => Err(SimError::invalid_param(
                unknown.as_str(),
                format!("unknown parameter (expected one of: {})", known.join(", ")),
            )),
            None => Ok(()),
        }
    }
}

impl std::fmt::Display for GameParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

/// Session configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Suppress per-step progress reporting.
    pub quiet: bool,

    /// Root seed; chance sampling, random openings and random agents each
    /// draw from their own stream of it.
    pub seed: u64,

    /// Forced opening applied before the main loop.
    pub opening: OpeningSpec,

    /// One agent per player, in seat order. Seats without an entry get the
    /// default agent.
    pub agents: Vec<AgentSpec>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            seed: 42,
            opening: OpeningSpec::None,
            agents: Vec::new(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_opening(mut self, opening: OpeningSpec) -> Self {
        self.opening = opening;
        self
    }

    pub fn with_agents(mut self, agents: Vec<AgentSpec>) -> Self {
        self.agents = agents;
        self
    }

    /// Agent spec for a seat, falling back to the default agent.
    pub fn agent_for(&self, seat: usize) -> AgentSpec {
        self.agents.get(seat).cloned().unwrap_or_default()
    }
}
