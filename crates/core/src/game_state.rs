//! Game state module - one play-through of the game
//!
//! This module ties together the board, the falling piece, the picker and the
//! scoring rules. It advances in discrete steps: one per timer tick and one per
//! player action. It never sleeps or schedules anything itself; the caller asks
//! [`GameState::next_tick_in`] when to deliver the next tick.

use std::time::Duration;

use log::{debug, info};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::PiecePicker;
use crate::scoring::{level_for_score, line_clear_points, tick_interval};
use crate::types::{
    GameAction, PieceColor, Point, ScoringProfile, BOARD_HEIGHT, BOARD_WIDTH, PIECE_CELLS,
    START_LEVEL,
};

/// Narrowest board a session accepts: the horizontal I is four cells wide.
pub const MIN_BOARD_WIDTH: usize = PIECE_CELLS;

/// Construction-time parameters of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u32,
    pub scoring: ScoringProfile,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            seed: 1,
            scoring: ScoringProfile::default(),
        }
    }
}

/// What a timer tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session is paused; nothing changed
    Paused,
    /// Piece fell one row and is still falling
    Fell,
    /// Piece was fixed onto the board and a new one was picked
    Locked { lines_cleared: usize },
    /// The spawn area is full; the session is over
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: SessionConfig,
    board: Board,
    active: Piece,
    picker: PiecePicker,
    score: u32,
    level: u32,
    lines: u32,
    paused: bool,
    game_over: bool,
    quit_requested: bool,
}

impl GameState {
    /// Create a standard 10x20 game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(SessionConfig {
            seed,
            ..SessionConfig::default()
        })
    }

    /// Create a game from an explicit configuration
    ///
    /// # Panics
    ///
    /// Panics if the board is narrower than [`MIN_BOARD_WIDTH`] or shorter
    /// than four rows; the widest shape could never fit between the walls.
    pub fn with_config(config: SessionConfig) -> Self {
        assert!(
            config.width >= MIN_BOARD_WIDTH && config.height >= PIECE_CELLS,
            "board {}x{} too small for a {}-cell piece",
            config.width,
            config.height,
            PIECE_CELLS
        );
        let mut picker = PiecePicker::new(config.seed);
        let active = picker.pick(config.width);

        Self {
            config,
            board: Board::new(config.width, config.height),
            active,
            picker,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            paused: false,
            game_over: false,
            quit_requested: false,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Gravity interval for the current level
    pub fn tick_interval(&self) -> Duration {
        tick_interval(self.level)
    }

    /// When the caller should deliver the next tick.
    ///
    /// `None` while paused or after game over: the tick schedule stops and
    /// resumes only once this returns `Some` again.
    pub fn next_tick_in(&self) -> Option<Duration> {
        if self.paused || self.game_over {
            None
        } else {
            Some(self.tick_interval())
        }
    }

    /// Check if the live piece covers `(row, col)`
    pub fn is_active_at(&self, row: usize, col: usize) -> bool {
        !self.game_over && self.active.is_occupying(Point::new(row as i32, col as i32))
    }

    /// Color to draw at `(row, col)`: the live piece over the board
    pub fn cell_color(&self, row: usize, col: usize) -> Option<PieceColor> {
        if self.is_active_at(row, col) {
            Some(self.active.color())
        } else {
            self.board.color_at(row, col)
        }
    }

    fn running(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// Advance gravity by one step
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::GameOver;
        }
        if self.paused {
            return TickOutcome::Paused;
        }

        if self.active.can_move_down(&self.board) {
            self.active.move_down();
        } else if self.active.moves() == 0 {
            self.game_over = true;
            info!(
                "game over: score={} level={} lines={} blocked piece {}",
                self.score, self.level, self.lines, self.active
            );
            return TickOutcome::GameOver;
        }

        // A piece that landed on this tick is fixed right away.
        let imprint = self.board.emprint(&self.active);
        if !imprint.applied {
            return TickOutcome::Fell;
        }

        debug!("locked {}", self.active);
        self.on_lines_cleared(imprint.lines_cleared);
        self.active = self.picker.pick(self.config.width);

        TickOutcome::Locked {
            lines_cleared: imprint.lines_cleared,
        }
    }

    fn on_lines_cleared(&mut self, lines_cleared: usize) {
        if lines_cleared == 0 {
            return;
        }

        self.lines += lines_cleared as u32;
        self.score = self
            .score
            .saturating_add(line_clear_points(lines_cleared, self.config.scoring));

        let level = level_for_score(self.score);
        if level != self.level {
            info!(
                "level {} -> {} (tick {}ms)",
                self.level,
                level,
                tick_interval(level).as_millis()
            );
            self.level = level;
        }
        debug!(
            "cleared {} row(s): score={} lines={}",
            lines_cleared, self.score, self.lines
        );
    }

    /// Move the piece one column left if every cell can follow
    pub fn try_move_left(&mut self) -> bool {
        if !self.running() || !self.active.can_move_left(&self.board) {
            return false;
        }
        self.active.move_left();
        true
    }

    /// Move the piece one column right if every cell can follow
    pub fn try_move_right(&mut self) -> bool {
        if !self.running() || !self.active.can_move_right(&self.board) {
            return false;
        }
        self.active.move_right();
        true
    }

    /// Move the piece one row down if every cell can follow
    pub fn try_move_down(&mut self) -> bool {
        if !self.running() || !self.active.can_move_down(&self.board) {
            return false;
        }
        self.active.move_down();
        true
    }

    /// Drop the piece until it is blocked; it locks on the next tick
    pub fn hard_drop(&mut self) -> bool {
        let mut dropped = 0;
        while self.try_move_down() {
            dropped += 1;
        }
        dropped > 0
    }

    /// Rotate the active piece.
    ///
    /// Rotation does not test placed blocks. A result reaching below the floor
    /// is refused because it could never be fixed onto the board.
    pub fn try_rotate(&mut self) -> bool {
        if !self.running() {
            return false;
        }

        let rotated = self.active.rotate(self.config.width);
        if rotated == self.active {
            return false;
        }
        let height = self.config.height as i32;
        if rotated.points().iter().any(|p| p.row >= height) {
            return false;
        }

        self.active = rotated;
        true
    }

    fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        debug!("{}", if self.paused { "paused" } else { "resumed" });
        true
    }

    fn restart(&mut self) {
        let config = SessionConfig {
            seed: self.picker.seed(),
            ..self.config
        };
        info!("restart: previous score={} lines={}", self.score, self.lines);
        *self = Self::with_config(config);
    }

    /// Apply a player action; returns whether the state changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move_left(),
            GameAction::MoveRight => self.try_move_right(),
            GameAction::MoveDown => self.try_move_down(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.try_rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Quit => {
                self.quit_requested = true;
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
