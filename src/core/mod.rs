//! Core module: pure game rules with no I/O dependencies.
//!
//! Everything in here is deterministic and unit-testable. The terminal
//! layers consume it through read-only accessors on [`Session`].

pub mod catalog;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod session;

pub use catalog::{color, spawn_shape, Shape};
pub use grid::Grid;
pub use piece::ActivePiece;
pub use rng::{PieceSource, SimpleRng};
pub use session::Session;
