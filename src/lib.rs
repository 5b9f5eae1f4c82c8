//! Falling-block puzzle engine with a terminal front end.
//!
//! The `core` module is pure game logic (shape catalog, grid, active
//! piece, session state machine) with no terminal dependency, so it can
//! be tested and benchmarked headlessly. `term` draws a session through
//! a diffing framebuffer renderer, and `input` maps key events to game
//! commands and rate-limits directional movement.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
