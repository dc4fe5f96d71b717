//! JSON file of best scores per player and wordle

use super::{ScoreAck, ScoreSink};
use crate::error::ScoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BookData {
    #[serde(default)]
    players: BTreeMap<String, BTreeMap<u64, u32>>,
}

/// Score book stored as a JSON file
///
/// The file is re-read on every submission so that several runs sharing one
/// book never overwrite each other's results with stale data.
#[derive(Debug, Clone)]
pub struct ScoreBook {
    path: PathBuf,
    player: String,
}

impl ScoreBook {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, player: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            player: player.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    fn read(&self) -> Result<BookData, ScoreError> {
        if !self.path.exists() {
            return Ok(BookData::default());
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(BookData::default());
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn write(&self, data: &BookData) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(data)?)?;
        Ok(())
    }

    /// Best stored score of this player for `wordle_id`
    ///
    /// # Errors
    /// Returns an error if the book exists but cannot be read.
    pub fn best(&self, wordle_id: u64) -> Result<Option<u32>, ScoreError> {
        Ok(self
            .read()?
            .players
            .get(&self.player)
            .and_then(|scores| scores.get(&wordle_id))
            .copied())
    }
}

impl ScoreSink for ScoreBook {
    fn submit_score(&mut self, wordle_id: u64, score: u32) -> Result<ScoreAck, ScoreError> {
        let mut data = self.read()?;
        let scores = data.players.entry(self.player.clone()).or_default();
        let ack = ScoreAck::merge(scores.get(&wordle_id).copied(), score);

        if matches!(ack, ScoreAck::Kept { .. }) {
            tracing::debug!(player = %self.player, wordle_id, score, "existing score is higher or equal");
            return Ok(ack);
        }

        scores.insert(wordle_id, ack.best());
        self.write(&data)?;
        tracing::info!(player = %self.player, wordle_id, score, "score saved");
        Ok(ack)
    }
}
