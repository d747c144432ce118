#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Ghost-text suggestion engine for line-oriented editors.
//!
//! This crate matches what the user is typing against a fixed multi-line
//! suggestion and tells the host editor what to draw and when to splice
//! the rest of the suggestion in. It owns no buffer and no screen: hosts
//! feed it [`EditorSnapshot`] views and apply the requests it returns.
//!
//! # Main Types
//!
//! - [`SuggestionController`] - One session; folds notifications into state and requests
//! - [`SuggestionTemplate`] - The fixed suggestion text, split into lines
//! - [`MatchState`] - Idle, or suggesting at an anchor line
//! - [`Sessions`] - One controller per host buffer
//!
//! # Architecture
//!
//! ```text
//! host notification (snapshot, caret)
//!         │
//!         ▼
//! SuggestionController::update
//!         ├── matcher::match_line     // aligns the caret line with the template
//!         ├── render::ghost_rows      // rows to draw when a match holds
//!         └── UpdateOutcome           // render | replace | invalidate, plus state
//!                 │
//!                 ▼
//! host draws rows / splices text / repaints the span
//! ```

/// Rope-backed reference buffer for tests and headless hosts.
pub mod buffer;
/// Session configuration and its validation.
pub mod config;
/// Session driver producing render/replace requests.
pub mod controller;
/// Line-to-template alignment.
pub mod matcher;
/// Ghost-row computation for the renderer.
pub mod render;
/// Per-buffer session registry.
pub mod sessions;
/// Read-only buffer view the engine consumes.
pub mod snapshot;
/// Session state machine.
pub mod state;
/// The suggestion text itself.
pub mod template;

pub use buffer::{BufferSnapshot, ScratchBuffer};
pub use config::{ConfigError, SuggestionConfig};
pub use controller::{LineSpan, RenderRequest, ReplaceRequest, SuggestionController, UpdateOutcome};
pub use matcher::{LineMatch, match_line};
pub use render::{GhostRow, ghost_rows};
pub use sessions::{BufferId, Sessions};
pub use snapshot::EditorSnapshot;
pub use state::MatchState;
pub use template::SuggestionTemplate;
