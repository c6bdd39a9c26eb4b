//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the whole simulation: board state, falling pieces,
//! rotation, imprinting, row clearing and the score/level/speed progression.
//! It has no dependencies on terminals, input devices or clocks; callers
//! drive it one step at a time.
//!
//! # Module Structure
//!
//! - [`board`]: occupancy + color grid, imprinting and row clearing
//! - [`pieces`]: the static catalog of 19 shapes
//! - [`piece`]: the falling piece: collision checks, moves, rotation
//! - [`rng`]: seeded LCG and the uniform piece picker
//! - [`scoring`]: points per clear, level from score, tick interval from level
//! - [`game_state`]: one play-through, driven by ticks and actions
//!
//! # Game Rules
//!
//! - New pieces are picked uniformly from 7 shapes and spawn centered on row 0.
//! - Each tick moves the piece down one row. A piece that cannot move down is
//!   fixed onto the board; if it never moved down at all, the game is over.
//! - Rotation follows a fixed shape graph; the rotated piece is anchored on
//!   the old piece's first cell and pushed back inside the side walls.
//! - Full rows are removed and the rows above drop down.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, TickOutcome};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The dropped piece is fixed on the next tick.
//! assert!(matches!(game.tick(), TickOutcome::Locked { .. }));
//! assert_eq!(game.board().filled_count(), 4);
//! ```

pub mod board;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Imprint};
pub use game_state::{GameState, SessionConfig, TickOutcome, MIN_BOARD_WIDTH};
pub use piece::Piece;
pub use pieces::{shape_offsets, shape_points};
pub use rng::{spawn, PiecePicker, SimpleRng};
pub use scoring::{level_for_score, line_clear_points, tick_interval, tick_interval_ms};
