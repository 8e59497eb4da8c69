//! # rally_core - Rally trajectory and scene-editing engine
//!
//! This library turns taps on a tennis court grid into an editable
//! rally document: quadratic shot trajectories, forehand/backhand
//! classification from geometry, and a pure state machine over scenes
//! and shots, with a JSON API for easy integration with game engines
//! and UI hosts.
//!
//! ## Features
//! - Fully deterministic geometry (same inputs = same trajectory)
//! - Pure reducer; hosts replace the state wholesale on every action
//! - JSON boundary for engine-agnostic embedding

pub mod api;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod models;
pub mod state;

pub use api::{dispatch_json, new_session_json, trajectory_json, SCHEMA_VERSION};
pub use error::{RallyError, Result};
pub use models::Document;
pub use state::{Action, EditorState, Phase, PlayerId};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
