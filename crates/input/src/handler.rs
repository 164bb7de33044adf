//! Per-frame input gate.
//!
//! Terminals deliver key presses in bursts (and some emit auto-repeat as
//! presses). The game resolves at most one drop per frame, so every tap read
//! during a frame collapses into a single `Tap`. Within a frame, going to the
//! title wins over a restart, and a restart wins over taps.

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Collects actions between two frames.
#[derive(Debug, Clone, Default)]
pub struct TapGate {
    tap: bool,
    restart: bool,
    title: bool,
    /// Terminal reports key releases (keyboard enhancement enabled).
    reports_release: bool,
    /// Keys currently held. Only tracked when releases are reported.
    held: ArrayVec<KeyCode, 8>,
}

impl TapGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track held keys so a press repeated before its release is ignored.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.reports_release = enabled;
        self
    }

    /// Feed one key event. Returns the action it mapped to, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<GameAction> {
        match key.kind {
            KeyEventKind::Press => {
                if self.reports_release && self.held.contains(&key.code) {
                    return None;
                }
                let action = handle_key_event(key)?;
                if self.reports_release && self.held.try_push(key.code).is_err() {
                    self.held.clear();
                }
                self.push(action);
                Some(action)
            }
            KeyEventKind::Repeat => None,
            KeyEventKind::Release => {
                self.held.retain(|c| *c != key.code);
                None
            }
        }
    }

    /// Queue an action directly.
    pub fn push(&mut self, action: GameAction) {
        match action {
            GameAction::Tap => self.tap = true,
            GameAction::Restart => self.restart = true,
            GameAction::Title => self.title = true,
        }
    }

    /// Forget held keys (e.g. after focus loss).
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_pending(&self) -> bool {
        self.tap || self.restart || self.title
    }

    /// Take the action for this frame: at most one.
    pub fn take_frame_action(&mut self) -> Option<GameAction> {
        let action = if self.title {
            Some(GameAction::Title)
        } else if self.restart {
            Some(GameAction::Restart)
        } else if self.tap {
            Some(GameAction::Tap)
        } else {
            None
        };
        self.tap = false;
        self.restart = false;
        self.title = false;
        action
    }
}
