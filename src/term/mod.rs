//! Terminal presentation layer.
//!
//! `fb` holds the styled framebuffer, `game_view` projects session state
//! into it, and `renderer` flushes frames to the terminal via crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Rect};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
