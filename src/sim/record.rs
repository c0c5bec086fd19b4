//! Session records: save a finished session and replay it later.
//!
//! A replay feeds the recorded history back through the forced-opening
//! protocol. Chance outcomes replay too, because chance nodes list their
//! outcomes as legal actions with the same labels they were recorded under.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::core::{GameParams, PlayerMap, Result, SimError};

use super::driver::Outcome;
use super::opening::OpeningSpec;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub game: String,
    pub params: GameParams,
    pub seed: u64,
    pub history: Vec<String>,
    pub returns: Vec<f64>,
}

impl SessionRecord {
    pub fn new(game: impl Into<String>, params: GameParams, seed: u64, outcome: &Outcome) -> Self {
        Self {
            game: game.into(),
            params,
            seed,
            history: outcome.history.labels().to_vec(),
            returns: outcome.returns.as_slice().to_vec(),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(reader)?)
    }

    /// The recorded history as a forced opening.
    pub fn opening(&self) -> OpeningSpec {
        OpeningSpec::Fixed(self.history.clone())
    }

    /// Check that a replayed session ended with the recorded returns.
    pub fn verify(&self, replayed: &Outcome) -> Result<()> {
        if replayed.returns.as_slice() == self.returns.as_slice() {
            Ok(())
        } else {
            Err(SimError::ReplayDiverged {
                expected: PlayerMap::from(self.returns.clone()).to_string(),
                actual: replayed.returns.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::History;

    fn outcome(returns: Vec<f64>) -> Outcome {
        Outcome {
            history: History::from(vec!["roll".to_string(), "chance outcome 3".to_string()]),
            returns: returns.into(),
        }
    }

    #[test]
    fn test_opening_uses_history() {
        let record = SessionRecord::new("pig", GameParams::new(), 1, &outcome(vec![0.0, 0.0]));
        assert_eq!(
            record.opening(),
            OpeningSpec::Fixed(vec!["roll".into(), "chance outcome 3".into()])
        );
    }

    #[test]
    fn test_verify_detects_divergence() {
        let record = SessionRecord::new("pig", GameParams::new(), 1, &outcome(vec![1.0, -1.0]));

        assert!(record.verify(&outcome(vec![1.0, -1.0])).is_ok());

        let err = record.verify(&outcome(vec![-1.0, 1.0])).unwrap_err();
        assert!(matches!(err, SimError::ReplayDiverged { .. }));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("turnloop-record-{}.bin", std::process::id()));
        let params = GameParams::new().with("winscore", 20);
        let record = SessionRecord::new("pig", params, 99, &outcome(vec![1.0, -1.0]));

        record.save(&path).unwrap();
        let loaded = SessionRecord::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, record);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SessionRecord::load("/nonexistent/turnloop/record.bin").unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }
}
