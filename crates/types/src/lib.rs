//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, persistence).
//!
//! # World Dimensions
//!
//! The game runs in a fixed logical world; presentation layers scale it:
//!
//! - **Width**: 720 units (the swinging layer bounces between the edges)
//! - **Height**: 1280 units
//! - **Layer height**: 60 units per stacked cake layer
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_WIDTH` | 400 | Width of the base layer and the first swinging layer |
//! | `MIN_WIDTH` | 30 | Layers trimmed to this width or below end the run |
//! | `PERFECT_THRESHOLD` | 15 | Center distance below which a drop snaps perfectly |
//! | `BASE_SPEED` | 4 | Swing speed (units per frame) at score 0 |
//! | `SPEED_INCREMENT` | 0.15 | Speed added per point of score |
//! | `SPEED_CAP` | 12 | Maximum swing speed |
//! | `SWING_MARGIN` | 20 | Gap kept between a swinging layer and the world edge |
//! | `DROP_FRAMES` | 9 | Frames a dropped layer spends falling (~150ms) |
//!
//! # Examples
//!
//! ```
//! use cake_tower_types::{GameAction, LandingKind, Rating, WORLD_WIDTH};
//!
//! assert_eq!(GameAction::from_str("tap"), Some(GameAction::Tap));
//! assert_eq!(LandingKind::Perfect.as_str(), "perfect");
//! assert_eq!(Rating::from_score(12), Rating::Skilled);
//! assert_eq!(WORLD_WIDTH, 720.0);
//! ```

/// Logical world width in units
pub const WORLD_WIDTH: f32 = 720.0;

/// Logical world height in units
pub const WORLD_HEIGHT: f32 = 1280.0;

/// Height of a single cake layer in units
pub const LAYER_HEIGHT: f32 = 60.0;

/// Y coordinate of the plate the base layer sits on
pub const BASE_Y: f32 = WORLD_HEIGHT - 150.0;

/// Y coordinate of the swinging layer
pub const SWING_Y: f32 = 280.0;

/// Width of the base layer (and the first swinging layer)
pub const INITIAL_WIDTH: f32 = 400.0;

/// Layers at or below this width end the run
pub const MIN_WIDTH: f32 = 30.0;

/// Center distance (exclusive) under which a drop counts as perfect
pub const PERFECT_THRESHOLD: f32 = 15.0;

/// Swing speed at score 0 (units per frame)
pub const BASE_SPEED: f32 = 4.0;

/// Swing speed added per point of score
pub const SPEED_INCREMENT: f32 = 0.15;

/// Upper bound on swing speed
pub const SPEED_CAP: f32 = 12.0;

/// Gap between a swinging layer's edge and the world edge at which it turns
pub const SWING_MARGIN: f32 = 20.0;

/// Frames a dropped layer falls before the landing is resolved (150ms at 60 FPS)
pub const DROP_FRAMES: u32 = 9;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Frames between the game-over transition and the result screen (~1.5s)
pub const RESULT_DELAY_FRAMES: u32 = 90;

/// Scores that trigger a one-shot milestone notification
pub const MILESTONES: [u32; 3] = [10, 20, 30];

/// Combo length from which every further perfect landing fires `Cue::Combo`
pub const COMBO_CUE_MIN: u32 = 3;

/// Combo length from which the announcer switches to its "combo" lines
pub const COMBO_FLAVOR_MIN: u32 = 5;

/// Trimmed pieces narrower than this are not reported for animation
pub const CUT_PIECE_MIN_WIDTH: f32 = 5.0;

/// Number of distinct cake colours the layers cycle through
pub const LAYER_PALETTE_LEN: u32 = 6;

/// Player actions that can be applied to the game
///
/// Input devices (keyboard, tests, replays) all reduce to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Drop the swinging layer (or start the run when ready)
    Tap,
    /// Abandon the current run and start over
    Restart,
    /// Abandon the current run and go back to the title screen
    Title,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use cake_tower_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("TAP"), Some(GameAction::Tap));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tap" => Some(GameAction::Tap),
            "restart" => Some(GameAction::Restart),
            "title" => Some(GameAction::Title),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Tap => "tap",
            GameAction::Restart => "restart",
            GameAction::Title => "title",
        }
    }
}

/// Classification of a resolved drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandingKind {
    /// No usable overlap; the run ends
    Miss,
    /// Center within tolerance; width is preserved
    Perfect,
    /// Overlapping but off-center; width shrinks to the overlap
    Partial,
}

impl LandingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LandingKind::Miss => "miss",
            LandingKind::Perfect => "perfect",
            LandingKind::Partial => "partial",
        }
    }
}

/// Why a drop was classified as a miss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissReason {
    /// The layers do not touch at all
    NoOverlap,
    /// The overlap is at or below `MIN_WIDTH`
    TooThin,
}

/// Which side of the tower a trimmed piece hung over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Unit sign of the side (-1 for left, +1 for right)
    pub fn sign(&self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Named audio triggers
///
/// Audio is best effort: sinks swallow their own failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Start,
    Combo,
    GameOver,
}

impl Cue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Start => "onStart",
            Cue::Combo => "onCombo",
            Cue::GameOver => "onGameOver",
        }
    }
}

/// Run lifecycle phase
///
/// `Ready → Swinging ⇄ Resolving → GameOver`; only a reset leaves `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Ready,
    Swinging,
    Resolving,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Ready => "ready",
            Phase::Swinging => "swinging",
            Phase::Resolving => "resolving",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Result-screen grade for a final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rating {
    Novice,
    Promising,
    Skilled,
    Professional,
    FirstClass,
    Legendary,
}

impl Rating {
    pub fn from_score(score: u32) -> Self {
        match score {
            30.. => Rating::Legendary,
            20.. => Rating::FirstClass,
            15.. => Rating::Professional,
            10.. => Rating::Skilled,
            5.. => Rating::Promising,
            _ => Rating::Novice,
        }
    }

    /// Display title shown on the result screen
    pub fn title(&self) -> &'static str {
        match self {
            Rating::Legendary => "Legendary Patissier!",
            Rating::FirstClass => "First-Class Patissier!",
            Rating::Professional => "Professional Grade!",
            Rating::Skilled => "Nicely Done!",
            Rating::Promising => "Getting There!",
            Rating::Novice => "Practice Makes Perfect!",
        }
    }
}
