//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the cake stacking game: the tower, the
//! swinging layer, landing resolution and progression. It has **no
//! dependencies** on terminals, files or clocks, making it:
//!
//! - **Deterministic**: the same taps at the same frames produce the same run
//! - **Testable**: the landing resolver is a pure function
//! - **Portable**: any front-end can drive it with `tap()` and `tick(frames)`
//!
//! # Module Structure
//!
//! - [`stack`]: placed layers, base first
//! - [`oscillator`]: the swinging layer and its bounce bounds
//! - [`landing`]: overlap computation and miss/perfect/partial classification
//! - [`progression`]: score, combo, swing speed and milestones
//! - [`game_state`]: the run state machine tying everything together
//! - [`events`]: landing/milestone/cue events for presentation collaborators
//! - [`high_score`]: settlement against a persisted best score
//! - [`flavor`]: cosmetic announcer lines from a seeded RNG
//!
//! # Rules
//!
//! - A tap freezes the swinging layer; after a short fall it is resolved
//!   against the top of the tower.
//! - Perfect drops (center within 15 units) snap onto the column below and keep
//!   their width; other overlapping drops are trimmed to the overlap.
//! - Missing the tower, or trimming a layer to 30 units or less, ends the run.
//! - Every surviving layer is worth one point; swing speed grows with score.
//!
//! # Example
//!
//! ```
//! use cake_tower_core::{GameConfig, GameState};
//! use cake_tower_core::types::Phase;
//!
//! let mut game = GameState::new(GameConfig { drop_frames: 0, ..GameConfig::default() });
//! game.start();
//!
//! // Drop straight away: the piece spawns centered, so this is perfect.
//! game.tap();
//! assert_eq!(game.score(), 1);
//! assert_eq!(game.combo(), 1);
//! assert_eq!(game.phase(), Phase::Swinging);
//!
//! game.tick(1);
//! ```

pub mod config;
pub mod events;
pub mod flavor;
pub mod game_state;
pub mod high_score;
pub mod landing;
pub mod oscillator;
pub mod progression;
pub mod rng;
pub mod snapshot;
pub mod stack;

pub use cake_tower_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use events::{CueSink, GameEvent, LandingEvent, SilentCues};
pub use flavor::FlavorPicker;
pub use game_state::GameState;
pub use high_score::{settle, HighScoreStore, MemoryHighScore, RunResult};
pub use landing::{CutPiece, Landing, LandingRules};
pub use oscillator::{ActivePiece, Direction};
pub use progression::{swing_speed, RunState};
pub use rng::SimpleRng;
pub use snapshot::{ActiveSnapshot, GameSnapshot, SegmentSnapshot, SNAPSHOT_SEGMENTS};
pub use stack::{Stack, StackSegment};
