//! Events emitted by the game state for presentation collaborators.
//!
//! The state buffers events in a small fixed-capacity queue; front-ends drain
//! it once per frame (see [`GameState::drain_events`](crate::GameState::drain_events)).

use crate::landing::CutPiece;
use crate::stack::StackSegment;
use crate::types::{Cue, LandingKind};

/// Maximum number of undrained events kept by the state.
///
/// On overflow the oldest `Landed` or `Cue` event is evicted.
pub const EVENT_CAPACITY: usize = 16;

/// A resolved drop, with everything a renderer needs to animate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingEvent {
    pub kind: LandingKind,
    pub drop_x: f32,
    /// World y of the surface the piece landed on.
    pub drop_y: f32,
    pub overlap: f32,
    /// Segment appended to the stack (`None` on a miss).
    pub placed: Option<StackSegment>,
    pub cut: Option<CutPiece>,
    /// Combo after the landing was recorded.
    pub combo: u32,
    /// Score after the landing was recorded.
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Landed(LandingEvent),
    /// Score reached one of the milestone values.
    Milestone(u32),
    Cue(Cue),
    GameOver { score: u32 },
}

/// Audio collaborator. Best effort: implementations swallow their own errors.
pub trait CueSink {
    fn play(&mut self, cue: Cue);
}

/// Sink that ignores every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCues;

impl CueSink for SilentCues {
    fn play(&mut self, _cue: Cue) {}
}
