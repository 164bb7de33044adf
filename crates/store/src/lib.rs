//! File-backed high score storage.
//!
//! The best score lives in a small JSON document:
//!
//! ```json
//! { "best": 12 }
//! ```
//!
//! [`FileHighScore`] implements the core's [`HighScoreStore`] trait. The trait
//! methods never fail: a missing or unreadable file reads as 0 and write
//! errors are logged and dropped. The fallible [`FileHighScore::load`] and
//! [`FileHighScore::save`] are available for callers that want the error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub use cake_tower_core as core;

use cake_tower_core::HighScoreStore;

/// On-disk record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(default)]
    pub best: u32,
}

/// High score persisted as JSON at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored record. A missing file is an empty record.
    pub fn load(&self) -> Result<ScoreRecord> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(ScoreRecord::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("read {}", self.path.display()));
            }
        };
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parse high score file {}", self.path.display()))
    }

    /// Write the record, creating parent directories as needed.
    ///
    /// The document goes to a sibling temp file first and is then renamed over
    /// the old one, so a crash never leaves a half-written score behind.
    pub fn save(&self, record: &ScoreRecord) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let json = serde_json::to_vec_pretty(record)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace {}", self.path.display()))?;
        debug!("saved best {} to {}", record.best, self.path.display());
        Ok(())
    }
}

impl HighScoreStore for FileHighScore {
    fn read_high_score(&self) -> u32 {
        match self.load() {
            Ok(record) => record.best,
            Err(err) => {
                warn!("ignoring high score file: {err:#}");
                0
            }
        }
    }

    fn write_high_score(&mut self, score: u32) {
        if let Err(err) = self.save(&ScoreRecord { best: score }) {
            warn!("high score not saved: {err:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cake_tower_core::settle;

    #[test]
    fn missing_file_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHighScore::new(dir.path().join("scores.json"));
        assert_eq!(store.load().unwrap(), ScoreRecord::default());
        assert_eq!(store.read_high_score(), 0);
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileHighScore::new(dir.path().join("nested/dir/scores.json"));
        store.write_high_score(17);
        assert_eq!(store.read_high_score(), 17);
        assert!(!dir.path().join("nested/dir/scores.json.tmp").exists());
    }

    #[test]
    fn corrupt_file_reads_zero_and_is_overwritten_by_a_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, b"{ not json").unwrap();

        let mut store = FileHighScore::new(&path);
        assert!(store.load().is_err());
        assert_eq!(store.read_high_score(), 0);

        let result = settle(&mut store, 4);
        assert!(result.is_new_record);
        assert_eq!(store.read_high_score(), 4);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, br#"{"best": 9, "player": "anon"}"#).unwrap();
        assert_eq!(FileHighScore::new(&path).read_high_score(), 9);
    }

    #[test]
    fn settle_only_writes_strictly_greater_scores() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        let mut store = FileHighScore::new(&path);
        store.write_high_score(10);
        let before = fs::metadata(&path).unwrap().modified().unwrap();

        let result = settle(&mut store, 10);
        assert!(!result.is_new_record);
        assert_eq!(result.best, 10);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
    }
}
