//! Runtime configuration read from the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `CAKE_TOWER_SEED` | Announcer RNG seed | derived from the clock |
//! | `CAKE_TOWER_SCORE_PATH` | High score file | `$HOME/.cake_tower.json` |
//! | `CAKE_TOWER_LOG_PATH` | Log file; logging is off when unset | none |
//! | `CAKE_TOWER_LOG` | Log filter (`env_logger` syntax) | `info` |
//! | `CAKE_TOWER_QUIET` | `1`/`true` silences the bell | off |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

const SCORE_FILE: &str = ".cake_tower.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub score_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub log_level: String,
    pub quiet: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty("CAKE_TOWER_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let score_path = non_empty("CAKE_TOWER_SCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| match non_empty("HOME") {
                Some(home) => PathBuf::from(home).join(SCORE_FILE),
                None => PathBuf::from(SCORE_FILE),
            });

        let log_path = non_empty("CAKE_TOWER_LOG_PATH").map(PathBuf::from);
        let log_level = non_empty("CAKE_TOWER_LOG").unwrap_or_else(|| "info".to_string());

        let quiet = non_empty("CAKE_TOWER_QUIET")
            .map(|s| matches!(s.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            seed,
            score_path,
            log_path,
            log_level,
            quiet,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
