//! Progression module - score, combo, speed ramp and milestones
//!
//! Scoring rules:
//! - Every surviving landing is worth exactly one point, perfect or not.
//! - Consecutive perfect landings build a combo; any partial landing breaks it.
//! - A miss ends the run and leaves the score untouched.

use crate::config::GameConfig;
use crate::types::{LandingKind, Rating, COMBO_CUE_MIN, MILESTONES};

/// Score bookkeeping for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RunState {
    pub score: u32,
    pub combo: u32,
    pub is_over: bool,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a resolved landing. Returns `false` if the run was already over.
    pub fn record(&mut self, kind: LandingKind) -> bool {
        if self.is_over {
            return false;
        }
        match kind {
            LandingKind::Perfect => {
                self.combo += 1;
                self.score += 1;
            }
            LandingKind::Partial => {
                self.combo = 0;
                self.score += 1;
            }
            LandingKind::Miss => {
                self.is_over = true;
            }
        }
        true
    }

    /// Whether the latest perfect landing should fire the combo cue.
    pub fn combo_cue_due(&self) -> bool {
        self.combo >= COMBO_CUE_MIN
    }

    pub fn rating(&self) -> Rating {
        Rating::from_score(self.score)
    }
}

/// Swing speed for a given score, clamped to the configured cap.
///
/// ```
/// use cake_tower_core::{progression::swing_speed, GameConfig};
///
/// let cfg = GameConfig::default();
/// assert_eq!(swing_speed(0, &cfg), 4.0);
/// assert_eq!(swing_speed(1000, &cfg), 12.0);
/// ```
pub fn swing_speed(score: u32, config: &GameConfig) -> f32 {
    (config.base_speed + score as f32 * config.speed_increment).min(config.speed_cap)
}

/// Milestone reached exactly at `score`, if any.
pub fn milestone_at(score: u32) -> Option<u32> {
    MILESTONES.iter().copied().find(|&m| m == score)
}
