//! Terminal front end: a pure view compositor plus a crossterm renderer.
//!
//! The core exposes everything a renderer needs - `for_each_shape` for the
//! falling shapes and `player_at`/dimensions for the grounded grid. This
//! crate turns that into a frame of owner-colored cells and flushes it to
//! the terminal.

pub mod renderer;
pub mod view;

pub use renderer::TerminalRenderer;
pub use view::Frame;
