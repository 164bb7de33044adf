use arrayvec::ArrayVec;

use crate::types::{Phase, WORLD_WIDTH};

/// Number of top-most segments copied into a snapshot.
pub const SNAPSHOT_SEGMENTS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSnapshot {
    pub center_x: f32,
    pub width: f32,
    /// Index in the stack, base = 0. Drives colour cycling.
    pub layer: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSnapshot {
    pub center_x: f32,
    pub width: f32,
    /// Layer index the piece becomes if it lands.
    pub layer: u32,
}

/// Render-facing copy of a [`GameState`](crate::GameState).
///
/// Fixed capacity so it can be refreshed every frame without allocating.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Top-most segments, bottom first.
    pub segments: ArrayVec<SegmentSnapshot, SNAPSHOT_SEGMENTS>,
    pub stack_height: u32,
    pub active: Option<ActiveSnapshot>,
    /// A drop is in flight.
    pub dropping: bool,
    pub phase: Phase,
    pub score: u32,
    pub combo: u32,
    pub speed: f32,
    pub episode_id: u32,
    pub world_width: f32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.segments.clear();
        self.stack_height = 0;
        self.active = None;
        self.dropping = false;
        self.phase = Phase::Ready;
        self.score = 0;
        self.combo = 0;
        self.speed = 0.0;
        self.episode_id = 0;
        self.world_width = WORLD_WIDTH;
    }

    pub fn playable(&self) -> bool {
        matches!(self.phase, Phase::Swinging | Phase::Resolving)
    }

    pub fn top(&self) -> Option<&SegmentSnapshot> {
        self.segments.last()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            segments: ArrayVec::new(),
            stack_height: 0,
            active: None,
            dropping: false,
            phase: Phase::Ready,
            score: 0,
            combo: 0,
            speed: 0.0,
            episode_id: 0,
            world_width: WORLD_WIDTH,
        }
    }
}
