//! Playthrough Binary
//!
//! Plays one game between built-in agents and prints the returns and the
//! action history.
//!
//! ```text
//! playthrough --game breakthrough --param rows=5 --param columns=5 --agent random --agent first
//! playthrough --game pig --param winscore=30 --quiet --record game.bin
//! playthrough --replay game.bin
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use turnloop::games::{Breakthrough, GameKind, Pig};
use turnloop::{AgentKind, AgentSpec, OpeningSpec, Outcome, PlayerId, SessionConfig, SessionRecord};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play one game between built-in agents", long_about = None)]
struct Args {
    /// Game identifier (breakthrough, pig)
    #[arg(long, default_value = GameKind::Breakthrough.name())]
    game: String,

    /// Game parameter, repeatable
    #[arg(long = "param", value_name = "NAME=VALUE")]
    params: Vec<String>,

    /// Agent for the next seat (random, first), repeatable
    #[arg(long = "agent", value_name = "KIND")]
    agents: Vec<AgentKind>,

    /// Checkpoint location for a seat, repeatable
    #[arg(long = "checkpoint", value_name = "SEAT=PATH")]
    checkpoints: Vec<String>,

    /// Forced opening label, repeatable
    #[arg(long = "opening", value_name = "LABEL", conflicts_with = "random_opening")]
    opening: Vec<String>,

    /// Number of random opening actions (default 1 without --opening)
    #[arg(long, value_name = "PLIES")]
    random_opening: Option<usize>,

    /// Session seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Don't show the moves as they're played
    #[arg(long)]
    quiet: bool,

    /// Write the finished session to this file
    #[arg(long, value_name = "PATH")]
    record: Option<PathBuf>,

    /// Replay a recorded session and check its returns
    #[arg(long, value_name = "PATH", conflicts_with_all = ["opening", "random_opening", "seed"])]
    replay: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    match playthrough(&args) {
        Ok(outcome) => {
            println!("{}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn playthrough(args: &Args) -> anyhow::Result<Outcome> {
    let replay = args
        .replay
        .as_ref()
        .map(|path| {
            SessionRecord::load(path)
                .with_context(|| format!("reading session record {}", path.display()))
        })
        .transpose()?;

    let (kind, params, seed, opening) = match &replay {
        Some(record) => (
            record.game.parse::<GameKind>()?,
            record.params.clone(),
            record.seed,
            record.opening(),
        ),
        None => {
            let kind = args.game.parse::<GameKind>()?;
            let mut params = kind.default_params();
            for assignment in &args.params {
                params.insert_assignment(assignment)?;
            }
            let opening = if args.opening.is_empty() {
                OpeningSpec::Random {
                    plies: args.random_opening.unwrap_or(1),
                }
            } else {
                OpeningSpec::Fixed(args.opening.clone())
            };
            (kind, params, args.seed.unwrap_or_else(rand::random), opening)
        }
    };

    let config = SessionConfig::new()
        .with_quiet(args.quiet)
        .with_seed(seed)
        .with_opening(opening)
        .with_agents(agent_specs(args)?);

    log::debug!("{} {} seed {}", kind.name(), params, seed);

    let outcome = match kind {
        GameKind::Breakthrough => turnloop::play(&Breakthrough::from_params(&params)?, &config)?,
        GameKind::Pig => turnloop::play(&Pig::from_params(&params)?, &config)?,
    };

    if let Some(record) = &replay {
        record.verify(&outcome)?;
        log::info!("replay matches the recorded returns");
    }

    if let Some(path) = &args.record {
        SessionRecord::new(kind.name(), params, seed, &outcome)
            .save(path)
            .with_context(|| format!("writing session record {}", path.display()))?;
    }

    Ok(outcome)
}

/// One spec per seat named by `--agent` or `--checkpoint`; other seats get
/// the default agent. Seats the game doesn't have are rejected by `play`.
fn agent_specs(args: &Args) -> anyhow::Result<Vec<AgentSpec>> {
    let mut specs: Vec<AgentSpec> = args.agents.iter().map(|&kind| AgentSpec::new(kind)).collect();

    for entry in &args.checkpoints {
        let (seat, path) = entry
            .split_once('=')
            .with_context(|| format!("checkpoint `{}` is not SEAT=PATH", entry))?;
        let seat: usize = seat
            .trim()
            .parse()
            .with_context(|| format!("checkpoint seat `{}` is not a number", seat))?;
        anyhow::ensure!(
            seat < PlayerId::MAX_PLAYERS,
            "checkpoint seat {} is out of range (at most {} players)",
            seat,
            PlayerId::MAX_PLAYERS
        );

        if specs.len() <= seat {
            specs.resize_with(seat + 1, AgentSpec::default);
        }
        specs[seat].checkpoint = Some(PathBuf::from(path));
    }

    Ok(specs)
}
