//! Gameplay tuning.

use crate::types::{
    BASE_SPEED, DROP_FRAMES, INITIAL_WIDTH, MIN_WIDTH, PERFECT_THRESHOLD, SPEED_CAP,
    SPEED_INCREMENT, SWING_MARGIN, WORLD_WIDTH,
};

/// Tunable parameters of a run.
///
/// `Default` reproduces the arcade release; tests and alternate front-ends may
/// override individual fields with struct update syntax.
///
/// ```
/// use cake_tower_core::GameConfig;
///
/// let cfg = GameConfig { drop_frames: 0, ..GameConfig::default() };
/// assert_eq!(cfg.initial_width, 400.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub world_width: f32,
    pub initial_width: f32,
    pub min_width: f32,
    pub perfect_threshold: f32,
    pub base_speed: f32,
    pub speed_increment: f32,
    pub speed_cap: f32,
    pub swing_margin: f32,
    /// Frames spent in `Phase::Resolving`. Zero resolves inside `tap()`.
    pub drop_frames: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            initial_width: INITIAL_WIDTH,
            min_width: MIN_WIDTH,
            perfect_threshold: PERFECT_THRESHOLD,
            base_speed: BASE_SPEED,
            speed_increment: SPEED_INCREMENT,
            speed_cap: SPEED_CAP,
            swing_margin: SWING_MARGIN,
            drop_frames: DROP_FRAMES,
        }
    }
}

impl GameConfig {
    /// Horizontal center of the world, where the base layer and every
    /// freshly spawned layer sit.
    pub fn center_x(&self) -> f32 {
        self.world_width / 2.0
    }

    pub fn landing_rules(&self) -> crate::landing::LandingRules {
        crate::landing::LandingRules {
            perfect_threshold: self.perfect_threshold,
            min_width: self.min_width,
        }
    }
}
