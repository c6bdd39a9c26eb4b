//! Piece module - the falling tetromino
//!
//! A piece is a catalog shape placed on the board: four absolute points, the
//! shape id it was built from and the number of downward moves it made since
//! it was picked. Pieces are plain values; rotating produces a new piece.

use std::fmt;

use crate::board::Board;
use crate::pieces::shape_points;
use crate::types::{PieceColor, Point, ShapeId, PIECE_CELLS};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    id: ShapeId,
    points: [Point; PIECE_CELLS],
    color: PieceColor,
    moves: u32,
}

impl Piece {
    /// Create a piece at the catalog origin
    pub fn from_shape(id: ShapeId) -> Self {
        Self {
            id,
            points: shape_points(id),
            color: id.color(),
            moves: 0,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn points(&self) -> &[Point; PIECE_CELLS] {
        &self.points
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }

    /// Successful downward moves since the piece was picked
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Return a copy shifted by `(d_row, d_col)`; the move counter is kept
    pub fn translated(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            points: self.points.map(|p| p.offset(d_row, d_col)),
            ..*self
        }
    }

    /// Check if every point can advance one row
    pub fn can_move_down(&self, board: &Board) -> bool {
        self.points
            .iter()
            .all(|p| board.is_free(p.row + 1, p.col))
    }

    /// Check if every point can advance one column right
    pub fn can_move_right(&self, board: &Board) -> bool {
        self.points
            .iter()
            .all(|p| board.is_free(p.row, p.col + 1))
    }

    /// Check if every point can advance one column left
    pub fn can_move_left(&self, board: &Board) -> bool {
        self.points
            .iter()
            .all(|p| board.is_free(p.row, p.col - 1))
    }

    /// Shift down one row and count the move
    pub fn move_down(&mut self) {
        self.shift(1, 0);
        self.moves += 1;
    }

    pub fn move_right(&mut self) {
        self.shift(0, 1);
    }

    pub fn move_left(&mut self) {
        self.shift(0, -1);
    }

    fn shift(&mut self, d_row: i32, d_col: i32) {
        for p in &mut self.points {
            *p = p.offset(d_row, d_col);
        }
    }

    /// Check whether this piece covers `point`
    pub fn is_occupying(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Rotate to the next shape in the rotation graph.
    ///
    /// The successor shape is placed with its local origin on this piece's
    /// first point, then pushed back inside `[0, width)` column by column.
    /// Placed blocks and the floor are not consulted. Shapes without a
    /// successor come back unchanged.
    ///
    /// `width` must be at least four columns, otherwise the correction never
    /// settles for the horizontal I.
    pub fn rotate(&self, width: usize) -> Piece {
        let Some(next) = self.id.successor() else {
            return *self;
        };

        let anchor = self.points[0];
        let mut rotated = Piece {
            moves: self.moves,
            ..Piece::from_shape(next)
        }
        .translated(anchor.row, anchor.col);
        rotated.correct_bounds(width);
        rotated
    }

    fn correct_bounds(&mut self, width: usize) {
        let width = width as i32;
        loop {
            if self.points.iter().any(|p| p.col < 0) {
                self.move_right();
            } else if self.points.iter().any(|p| p.col >= width) {
                self.move_left();
            } else {
                break;
            }
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id.letter())?;
        for p in &self.points {
            write!(f, " ({},{})", p.row, p.col)?;
        }
        Ok(())
    }
}
