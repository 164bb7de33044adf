//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` events. It maps key events into [`crate::types::GameAction`] and
//! provides a per-frame gate so a burst of key presses resolves at most one
//! drop per frame.

pub mod handler;
pub mod map;

pub use cake_tower_types as types;

pub use handler::TapGate;
pub use map::{handle_key_event, should_quit};
