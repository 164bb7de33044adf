//! Game state module - manages the complete state of a run
//!
//! This module ties together the stack, the swinging piece, the landing
//! resolver and progression. It is driven by two inputs only: `tap()` and
//! `tick(frames)`. All mutation is synchronous and ordered by those calls.

use arrayvec::ArrayVec;
use log::{debug, info, warn};

use crate::events::{GameEvent, LandingEvent, EVENT_CAPACITY};
use crate::landing;
use crate::oscillator::{ActivePiece, Direction};
use crate::progression::{milestone_at, swing_speed, RunState};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, SegmentSnapshot, SNAPSHOT_SEGMENTS};
use crate::stack::{Stack, StackSegment};
use crate::types::{Cue, GameAction, LandingKind, Phase, BASE_Y, LAYER_HEIGHT};
use crate::GameConfig;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    stack: Stack,
    active: Option<ActivePiece>,
    run: RunState,
    phase: Phase,
    speed: f32,
    /// Travel direction handed to the next spawned piece.
    direction: Direction,
    /// Frames left before a dropped piece is resolved.
    drop_timer: u32,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Frames advanced while swinging in the current run.
    frames: u64,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            stack: Stack::new(Self::base_segment(&config)),
            active: None,
            run: RunState::new(),
            phase: Phase::Ready,
            speed: swing_speed(0, &config),
            direction: Direction::default(),
            drop_timer: 0,
            episode_id: 0,
            frames: 0,
            events: ArrayVec::new(),
        }
    }

    fn base_segment(config: &GameConfig) -> StackSegment {
        StackSegment::new(config.center_x(), config.initial_width)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn run(&self) -> RunState {
        self.run
    }

    pub fn score(&self) -> u32 {
        self.run.score
    }

    pub fn combo(&self) -> u32 {
        self.run.combo
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn top(&self) -> StackSegment {
        self.stack.top()
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Leave `Ready` and spawn the first swinging piece.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        self.phase = Phase::Swinging;
        self.spawn_piece();
        self.emit(GameEvent::Cue(Cue::Start));
        info!("run {} started", self.episode_id);
        true
    }

    /// Throw away the current run and return to `Ready`.
    pub fn reset(&mut self) {
        self.stack.reset(Self::base_segment(&self.config));
        self.active = None;
        self.run = RunState::new();
        self.phase = Phase::Ready;
        self.speed = swing_speed(0, &self.config);
        self.direction = Direction::default();
        self.drop_timer = 0;
        self.frames = 0;
        self.events.clear();
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Handle a tap.
    ///
    /// Starts the run when ready, drops the piece while swinging, and is a
    /// no-op while a drop is in flight or after game over. Returns whether the
    /// tap had any effect.
    pub fn tap(&mut self) -> bool {
        match self.phase {
            Phase::Ready => self.start(),
            Phase::Swinging => {
                let Some(piece) = self.active else {
                    return false;
                };
                self.direction = piece.direction;
                self.phase = Phase::Resolving;
                self.drop_timer = self.config.drop_frames;
                if self.drop_timer == 0 {
                    self.resolve_drop();
                }
                true
            }
            Phase::Resolving | Phase::GameOver => false,
        }
    }

    /// Advance the simulation by `frames` frames.
    ///
    /// Returns whether anything moved or resolved.
    pub fn tick(&mut self, frames: u32) -> bool {
        if frames == 0 {
            return false;
        }
        match self.phase {
            Phase::Ready | Phase::GameOver => false,
            Phase::Swinging => {
                self.swing(frames);
                true
            }
            Phase::Resolving => {
                if frames < self.drop_timer {
                    self.drop_timer -= frames;
                    return true;
                }
                let rest = frames - self.drop_timer;
                self.drop_timer = 0;
                self.resolve_drop();
                if self.phase == Phase::Swinging && rest > 0 {
                    self.swing(rest);
                }
                true
            }
        }
    }

    /// Apply a player action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Tap => self.tap(),
            GameAction::Restart => {
                self.reset();
                self.start()
            }
            GameAction::Title => {
                self.reset();
                true
            }
        }
    }

    /// Take all pending events, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Take the oldest pending event.
    pub fn next_event(&mut self) -> Option<GameEvent> {
        if self.events.is_empty() {
            None
        } else {
            Some(self.events.remove(0))
        }
    }

    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Move the swinging layer to `center_x` (replays and scripted play).
    ///
    /// Only allowed while swinging; the position is not clamped.
    pub fn place_active(&mut self, center_x: f32) -> bool {
        match (self.phase, self.active.as_mut()) {
            (Phase::Swinging, Some(piece)) => {
                piece.center_x = center_x;
                true
            }
            _ => false,
        }
    }

    fn swing(&mut self, frames: u32) {
        if let Some(piece) = self.active.as_mut() {
            piece.advance(frames, self.config.world_width, self.config.swing_margin);
            self.frames += frames as u64;
        }
    }

    fn spawn_piece(&mut self) {
        let top = self.stack.top();
        self.active = Some(ActivePiece::new(
            self.config.center_x(),
            top.width,
            self.direction,
            self.speed,
        ));
    }

    fn resolve_drop(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        let top = self.stack.top();
        let drop_y = BASE_Y - self.stack.len() as f32 * LAYER_HEIGHT;
        let landing = landing::resolve(
            piece.center_x,
            piece.width,
            &top,
            &self.config.landing_rules(),
        );
        let kind = landing.kind();

        self.run.record(kind);
        if let Some(segment) = landing.segment() {
            self.stack.push(segment);
        }

        debug!(
            "landing {} at x={:.1} overlap={:.1} score={} combo={}",
            kind.as_str(),
            piece.center_x,
            landing.overlap(),
            self.run.score,
            self.run.combo
        );

        self.emit(GameEvent::Landed(LandingEvent {
            kind,
            drop_x: piece.center_x,
            drop_y,
            overlap: landing.overlap(),
            placed: landing.segment(),
            cut: landing.cut(),
            combo: self.run.combo,
            score: self.run.score,
        }));

        match kind {
            LandingKind::Miss => {
                self.phase = Phase::GameOver;
                self.emit(GameEvent::Cue(Cue::GameOver));
                self.emit(GameEvent::GameOver {
                    score: self.run.score,
                });
                info!(
                    "run {} over with score {} ({} layers)",
                    self.episode_id,
                    self.run.score,
                    self.stack.len()
                );
            }
            LandingKind::Perfect | LandingKind::Partial => {
                if kind == LandingKind::Perfect && self.run.combo_cue_due() {
                    self.emit(GameEvent::Cue(Cue::Combo));
                }
                if let Some(milestone) = milestone_at(self.run.score) {
                    self.emit(GameEvent::Milestone(milestone));
                }
                self.speed = swing_speed(self.run.score, &self.config);
                self.spawn_piece();
                self.phase = Phase::Swinging;
            }
        }
    }

    /// Queue an event. When the queue is full the oldest landing or cue
    /// makes room, so milestones and game over always reach the caller.
    fn emit(&mut self, event: GameEvent) {
        if self.events.is_full() {
            let evictable = self
                .events
                .iter()
                .position(|e| matches!(e, GameEvent::Landed(_) | GameEvent::Cue(_)));
            match evictable {
                Some(i) => {
                    let old = self.events.remove(i);
                    warn!("event queue full, evicting {:?}", old);
                }
                None => {
                    warn!("event queue full, dropping {:?}", event);
                    return;
                }
            }
        }
        self.events.push(event);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.segments.clear();
        let all = self.stack.segments();
        let skip = all.len().saturating_sub(SNAPSHOT_SEGMENTS);
        for (i, s) in all.iter().enumerate().skip(skip) {
            out.segments.push(SegmentSnapshot {
                center_x: s.center_x,
                width: s.width,
                layer: i as u32,
            });
        }
        out.stack_height = all.len() as u32;
        out.active = self.active.map(|p| ActiveSnapshot {
            center_x: p.center_x,
            width: p.width,
            layer: all.len() as u32,
        });
        out.dropping = self.phase == Phase::Resolving;
        out.phase = self.phase;
        out.score = self.run.score;
        out.combo = self.run.combo;
        out.speed = self.speed;
        out.episode_id = self.episode_id;
        out.world_width = self.config.world_width;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
