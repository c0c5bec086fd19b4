//! The simulation loop and its helpers.
//!
//! ## Overview
//!
//! - **resolver**: label → legal action
//! - **sampler**: chance outcome sampling (`ChanceSampler`, `WeightedSampler`)
//! - **opening**: forced-opening specs and random openings
//! - **driver**: `SimulationDriver`, the session loop
//! - **record**: save and replay finished sessions
//!
//! ## Usage
//!
//! ```rust
//! use turnloop::agents::{create_agents, AgentSpec};
//! use turnloop::core::{GameRng, SessionConfig};
//! use turnloop::games::Breakthrough;
//! use turnloop::rules::Game;
//! use turnloop::sim::run;
//!
//! let game = Breakthrough::new(5, 5);
//! let config = SessionConfig::default().with_quiet(true).with_seed(7);
//! let rng = GameRng::new(config.seed);
//!
//! let agents = create_agents(|_| AgentSpec::default(), &game, &rng).unwrap();
//! let outcome = run(game.new_initial_state(), agents, &[], &config).unwrap();
//!
//! assert_eq!(outcome.returns.player_count(), 2);
//! println!("{}", outcome);
//! ```

pub mod driver;
pub mod opening;
pub mod record;
pub mod resolver;
pub mod sampler;

pub use driver::{play, run, Outcome, SimulationDriver};
pub use opening::{random_opening, OpeningSpec};
pub use record::SessionRecord;
pub use resolver::resolve_action;
pub use sampler::{validate_distribution, ChanceSampler, WeightedSampler};
