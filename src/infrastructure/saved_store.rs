use crate::domain::recommendation::SavedBatch;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

const STORE_FILE: &str = "recommendations.json";

/// File-backed store for saved recommendation batches.
///
/// Append-only list under one JSON file: no eviction, no size bound, no
/// dedup. A missing file reads as the empty list; a malformed file is an
/// error, and appends fail rather than overwrite it.
pub struct SavedStore {
    file_path: PathBuf,
}

impl SavedStore {
    /// Store under ~/.profitpoke.
    pub fn new() -> Result<Self> {
        let home = std::env::var("HOME").context("Could not find HOME directory")?;
        Self::at_dir(PathBuf::from(home).join(".profitpoke"))
    }

    /// Store under an explicit directory (config override, tests).
    pub fn at_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir).context("Failed to create data directory")?;
        }
        Ok(Self {
            file_path: dir.join(STORE_FILE),
        })
    }

    pub fn load(&self) -> Result<Vec<SavedBatch>> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .context("Failed to read saved recommendations")?;
        let batches: Vec<SavedBatch> =
            serde_json::from_str(&content).context("Failed to parse saved recommendations")?;

        Ok(batches)
    }

    /// Append one batch and return the refreshed list.
    pub fn append(&self, batch: SavedBatch) -> Result<Vec<SavedBatch>> {
        let mut batches = self.load()?;
        batches.push(batch);

        let content = serde_json::to_string_pretty(&batches)
            .context("Failed to serialize saved recommendations")?;

        // Atomic write: write to temp file then rename
        let temp_path = self.file_path.with_extension("tmp");
        fs::write(&temp_path, content).context("Failed to write temp recommendations file")?;
        fs::rename(&temp_path, &self.file_path)
            .context("Failed to rename recommendations file")?;

        info!(
            "Saved batch ({} stock(s)) to {:?}, {} batch(es) total",
            batches.last().map(|b| b.stocks.len()).unwrap_or(0),
            self.file_path,
            batches.len()
        );
        Ok(batches)
    }
}
