//! Cake Tower (workspace facade crate).
//!
//! Re-exports the workspace crates as `cake_tower::{core,input,store,term,types}`
//! and hosts the scene flow ([`app`]) and runtime configuration ([`config`])
//! used by the binary.

pub mod app;
pub mod config;

pub use cake_tower_core as core;
pub use cake_tower_input as input;
pub use cake_tower_store as store;
pub use cake_tower_term as term;
pub use cake_tower_types as types;

pub use app::{App, Scene};
pub use config::AppConfig;
