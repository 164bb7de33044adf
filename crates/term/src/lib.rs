//! Terminal front-end for the cake tower.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! views write styled cells into a [`FrameBuffer`] and the
//! [`TerminalRenderer`] flushes only what changed since the last frame.
//!
//! The views are pure functions of a `core::GameSnapshot` (plus a little HUD
//! state the core does not own), so they can be tested without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screens;

pub use cake_tower_core as core;
pub use cake_tower_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{layer_color, GameView, HudView, Viewport, CAKE_PALETTE};
pub use renderer::{
    encode_diff_into, encode_full_into, for_each_changed_run, BellCues, TerminalRenderer,
};
pub use screens::{render_result, render_result_into, render_title, render_title_into};
