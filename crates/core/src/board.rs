//! Board module - manages the game grid
//!
//! The board is a `width × height` grid of occupancy flags (0 or 1) with a
//! parallel grid of cell colors. Both grids are flat row-major vectors.
//! Coordinates are `(row, col)`: row 0 is the top (spawn edge) and the last
//! row is the floor pieces fall towards.

use crate::piece::Piece;
use crate::types::PieceColor;

/// Result of trying to fix a piece onto the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Imprint {
    /// Whether the piece was written into the board
    pub applied: bool,
    /// Number of full rows removed by this imprint
    pub lines_cleared: usize,
}

impl Imprint {
    /// An imprint that was refused because the piece can still fall
    pub const REFUSED: Imprint = Imprint {
        applied: false,
        lines_cleared: 0,
    };
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Occupancy, row-major (row * width + col)
    cells: Vec<u8>,
    /// Color of each occupied cell, row-major
    colors: Vec<Option<PieceColor>>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            cells: vec![0; size],
            colors: vec![None; size],
        }
    }

    /// Build a board from text rows, top row first.
    ///
    /// `.` is an empty cell; a family letter (`I O T S Z J L`) is a filled cell
    /// with that family's color.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths or contain another character.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut board = Self::new(width, height);
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), width, "ragged board row {}", row);
            for (col, ch) in line.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let color = color_for_letter(ch)
                    .unwrap_or_else(|| panic!("unknown board cell {:?}", ch));
                board.set(row, col, color);
            }
        }
        board
    }

    /// Flat index of `(row, col)`; out of range is a caller bug
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({}, {}) outside {}x{} board",
            row,
            col,
            self.width,
            self.height
        );
        row * self.width + col
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Occupancy at `(row, col)`: 1 if filled, 0 if empty.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the board.
    pub fn at(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index(row, col)]
    }

    /// Color stored at `(row, col)`, `None` for an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the board.
    pub fn color_at(&self, row: usize, col: usize) -> Option<PieceColor> {
        self.colors[self.index(row, col)]
    }

    /// Check if a signed coordinate is inside the board and empty
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        row < self.height && col < self.width && self.cells[row * self.width + col] == 0
    }

    /// Fill a cell with the given color
    pub fn set(&mut self, row: usize, col: usize, color: PieceColor) {
        let idx = self.index(row, col);
        self.cells[idx] = 1;
        self.colors[idx] = Some(color);
    }

    /// Empty a cell
    pub fn clear_cell(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = 0;
        self.colors[idx] = None;
    }

    /// Occupancy flags of one row
    pub fn row(&self, row: usize) -> &[u8] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.width]
    }

    /// Number of filled cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().map(|&c| c as usize).sum()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row).iter().map(|&c| c as usize).sum::<usize>() == self.width
    }

    /// Fix a piece onto the board.
    ///
    /// Refused while the piece can still move down. Otherwise every cell the
    /// piece covers is filled with its color and full rows are cleared.
    pub fn emprint(&mut self, piece: &Piece) -> Imprint {
        if piece.can_move_down(self) {
            return Imprint::REFUSED;
        }

        let color = piece.color();
        for p in piece.points() {
            self.set(p.row as usize, p.col as usize, color);
        }

        Imprint {
            applied: true,
            lines_cleared: self.clear_full_rows(),
        }
    }

    /// Remove every full row, dropping the rows above it down.
    ///
    /// Rows are compacted bottom-up with a read and a write cursor, then the
    /// vacated rows at the top are emptied. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width;
        let mut write_row = self.height;
        let mut cleared = 0;

        for read_row in (0..self.height).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                let dst = write_row * width;
                self.cells.copy_within(src..src + width, dst);
                self.colors.copy_within(src..src + width, dst);
            }
        }

        for row in 0..write_row {
            let start = row * width;
            self.cells[start..start + width].fill(0);
            self.colors[start..start + width].fill(None);
        }

        cleared
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        self.cells.fill(0);
        self.colors.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::BOARD_WIDTH, crate::types::BOARD_HEIGHT)
    }
}

fn color_for_letter(ch: char) -> Option<PieceColor> {
    match ch {
        'I' => Some(PieceColor::Cyan),
        'O' => Some(PieceColor::Yellow),
        'T' => Some(PieceColor::Purple),
        'S' => Some(PieceColor::Green),
        'Z' => Some(PieceColor::Red),
        'J' => Some(PieceColor::Blue),
        'L' => Some(PieceColor::Orange),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeId;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(10, 20);
        assert_eq!(board.index(0, 0), 0);
        assert_eq!(board.index(0, 9), 9);
        assert_eq!(board.index(1, 0), 10);
        assert_eq!(board.index(19, 9), 199);
    }

    #[test]
    #[should_panic]
    fn test_at_out_of_range_panics() {
        let board = Board::new(10, 20);
        board.at(20, 0);
    }

    #[test]
    fn test_is_free_handles_signed_coordinates() {
        let mut board = Board::new(4, 4);
        board.set(2, 1, PieceColor::Red);

        assert!(board.is_free(0, 0));
        assert!(!board.is_free(2, 1));
        assert!(!board.is_free(-1, 0));
        assert!(!board.is_free(0, -1));
        assert!(!board.is_free(4, 0));
        assert!(!board.is_free(0, 4));
    }

    #[test]
    fn test_set_and_clear_cell() {
        let mut board = Board::new(10, 20);
        board.set(5, 3, PieceColor::Blue);
        assert_eq!(board.at(5, 3), 1);
        assert_eq!(board.color_at(5, 3), Some(PieceColor::Blue));

        board.clear_cell(5, 3);
        assert_eq!(board.at(5, 3), 0);
        assert_eq!(board.color_at(5, 3), None);
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(&["....", ".T..", "IIII"]);
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 3);
        assert_eq!(board.at(1, 1), 1);
        assert_eq!(board.color_at(1, 1), Some(PieceColor::Purple));
        assert!(board.is_row_full(2));
        assert_eq!(board.filled_count(), 5);
    }

    #[test]
    fn test_clear_keeps_colors_with_their_rows() {
        let mut board = Board::from_rows(&["J...", "IIII", ".L.."]);
        assert_eq!(board.clear_full_rows(), 1);

        assert_eq!(board.row(0), &[0, 0, 0, 0]);
        assert_eq!(board.row(1), &[1, 0, 0, 0]);
        assert_eq!(board.color_at(1, 0), Some(PieceColor::Blue));
        assert_eq!(board.color_at(2, 1), Some(PieceColor::Orange));
    }

    #[test]
    fn test_emprint_refused_while_piece_can_fall() {
        let mut board = Board::new(10, 20);
        let piece = Piece::from_shape(ShapeId::O).translated(0, 4);

        let before = board.clone();
        assert_eq!(board.emprint(&piece), Imprint::REFUSED);
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset() {
        let mut board = Board::from_rows(&["ZZ", "SS"]);
        board.reset();
        assert_eq!(board.filled_count(), 0);
        assert_eq!(board.color_at(0, 0), None);
    }
}
