//! Per-player decision agents.
//!
//! - `Agent`: the decide/notify interface the driver talks to
//! - `AgentSpec` / `create_agent`: build an agent for a seat
//! - `RandomAgent`, `FirstLegalAgent`: built-in agents

pub mod agent;
pub mod builtin;

pub use agent::{create_agent, create_agents, Agent, AgentKind, AgentSpec};
pub use builtin::{FirstLegalAgent, RandomAgent};
