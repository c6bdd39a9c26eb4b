//! Terminal rendering for blockfall.
//!
//! Rendering is split in two: [`game_view`] draws a game session into a plain
//! framebuffer without touching the terminal, and [`renderer`] flushes
//! framebuffers to stdout with crossterm, diffing against the previous frame.
//!
//! Board cells are drawn two columns wide so they look square in most fonts.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
