//! High-score settlement
//!
//! Persistence itself is a collaborator: the core only reads the previous
//! best once a run is over and writes back a strictly greater score.
//! Implementations must swallow their own failures.

use log::info;

/// Storage for the single best score.
pub trait HighScoreStore {
    /// Previous best, or 0 when nothing is stored or storage is unavailable.
    fn read_high_score(&self) -> u32;

    /// Persist a new best. Failures are the store's concern.
    fn write_high_score(&mut self, score: u32);
}

/// Outcome of settling a finished run against the stored best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunResult {
    pub score: u32,
    pub best: u32,
    pub is_new_record: bool,
}

/// Compare `score` with the stored best and write it back if strictly greater.
///
/// ```
/// use cake_tower_core::{settle, MemoryHighScore};
///
/// let mut store = MemoryHighScore::new(12);
/// assert!(!settle(&mut store, 12).is_new_record);
/// let result = settle(&mut store, 13);
/// assert!(result.is_new_record);
/// assert_eq!(result.best, 13);
/// ```
pub fn settle<S: HighScoreStore + ?Sized>(store: &mut S, score: u32) -> RunResult {
    let previous = store.read_high_score();
    let is_new_record = score > previous;
    if is_new_record {
        store.write_high_score(score);
        info!("new high score {} (was {})", score, previous);
    }
    RunResult {
        score,
        best: previous.max(score),
        is_new_record,
    }
}

/// In-memory store; the default when no persistent store is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryHighScore {
    best: u32,
    writes: u32,
}

impl MemoryHighScore {
    pub fn new(best: u32) -> Self {
        Self { best, writes: 0 }
    }

    /// Number of times the best score was written.
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl HighScoreStore for MemoryHighScore {
    fn read_high_score(&self) -> u32 {
        self.best
    }

    fn write_high_score(&mut self, score: u32) {
        self.best = score;
        self.writes += 1;
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn read_high_score(&self) -> u32 {
        (**self).read_high_score()
    }

    fn write_high_score(&mut self, score: u32) {
        (**self).write_high_score(score)
    }
}
