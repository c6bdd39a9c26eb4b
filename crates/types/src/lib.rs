//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the simulation core, the terminal view and the input layer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - Row 0 is the spawn edge, the last row is where gravity pulls pieces to.
//!
//! # Speed by Level
//!
//! Gravity ticks get faster as the level rises (milliseconds per row):
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 3 | 800ms |
//! | 4 | 700ms |
//! | 5 | 600ms |
//! | 6+ | 500ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, Point, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let p = Point::new(3, 4);
//! assert_eq!(p.offset(1, -1), Point::new(4, 3));
//!
//! assert_eq!(ShapeId::TNorth.successor(), Some(ShapeId::TEast));
//! assert_eq!(ShapeId::O.successor(), None);
//!
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Number of cells in every piece.
pub const PIECE_CELLS: usize = 4;

/// Points awarded per scoring unit (see [`ScoringProfile`]).
pub const POINTS_PER_LINE: u32 = 10;

/// Score needed to advance one level.
pub const POINTS_PER_LEVEL: u32 = 100;

/// Level at the start of a session.
pub const START_LEVEL: u32 = 1;

/// Tick interval per level in milliseconds.
///
/// Index 0 = Level 1, index 5 = Level 6.
pub const SPEED_TABLE_MS: [u64; 6] = [1000, 900, 800, 700, 600, 500];

/// Highest level; also the level where the speed table bottoms out.
pub const MAX_LEVEL: u32 = SPEED_TABLE_MS.len() as u32;

/// Interval used for any level outside the speed table.
pub const SPEED_FLOOR_MS: u64 = 500;

/// A grid coordinate.
///
/// Rows grow downwards, columns grow to the right. Coordinates are signed so a
/// piece may transiently sit outside the board while rotation corrects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return this point shifted by `(d_row, d_col)`.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Display color of a shape family
///
/// - **Cyan**: I
/// - **Yellow**: O
/// - **Purple**: T
/// - **Green**: S
/// - **Red**: Z
/// - **Blue**: J
/// - **Orange**: L
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

/// Identity of one of the 19 catalog shapes.
///
/// The discriminant is the shape's catalog index. Ids 1-7 are the spawnable
/// bag; the rest only appear as rotation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShapeId {
    IVertical = 0,
    IHorizontal = 1,
    O = 2,
    SHorizontal = 3,
    TNorth = 4,
    JNorth = 5,
    LNorth = 6,
    ZHorizontal = 7,
    SVertical = 8,
    TEast = 9,
    TSouth = 10,
    TWest = 11,
    JEast = 12,
    JSouth = 13,
    JWest = 14,
    LEast = 15,
    LSouth = 16,
    LWest = 17,
    ZVertical = 18,
}

impl ShapeId {
    /// All shapes in catalog order.
    pub const ALL: [ShapeId; 19] = [
        ShapeId::IVertical,
        ShapeId::IHorizontal,
        ShapeId::O,
        ShapeId::SHorizontal,
        ShapeId::TNorth,
        ShapeId::JNorth,
        ShapeId::LNorth,
        ShapeId::ZHorizontal,
        ShapeId::SVertical,
        ShapeId::TEast,
        ShapeId::TSouth,
        ShapeId::TWest,
        ShapeId::JEast,
        ShapeId::JSouth,
        ShapeId::JWest,
        ShapeId::LEast,
        ShapeId::LSouth,
        ShapeId::LWest,
        ShapeId::ZVertical,
    ];

    /// The seven shapes new pieces are drawn from.
    pub const BAG: [ShapeId; 7] = [
        ShapeId::IHorizontal,
        ShapeId::O,
        ShapeId::SHorizontal,
        ShapeId::TNorth,
        ShapeId::JNorth,
        ShapeId::LNorth,
        ShapeId::ZHorizontal,
    ];

    /// Catalog index of this shape.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Next shape in the rotation graph.
    ///
    /// `None` means the shape is its own rotation (only the O piece).
    ///
    /// ```
    /// use blockfall_types::ShapeId;
    ///
    /// assert_eq!(ShapeId::IHorizontal.successor(), Some(ShapeId::IVertical));
    /// assert_eq!(ShapeId::LWest.successor(), Some(ShapeId::LNorth));
    /// ```
    pub const fn successor(self) -> Option<Self> {
        match self {
            ShapeId::IVertical => Some(ShapeId::IHorizontal),
            ShapeId::IHorizontal => Some(ShapeId::IVertical),
            ShapeId::O => None,
            ShapeId::SHorizontal => Some(ShapeId::SVertical),
            ShapeId::SVertical => Some(ShapeId::SHorizontal),
            ShapeId::ZHorizontal => Some(ShapeId::ZVertical),
            ShapeId::ZVertical => Some(ShapeId::ZHorizontal),
            ShapeId::TNorth => Some(ShapeId::TEast),
            ShapeId::TEast => Some(ShapeId::TSouth),
            ShapeId::TSouth => Some(ShapeId::TWest),
            ShapeId::TWest => Some(ShapeId::TNorth),
            ShapeId::JNorth => Some(ShapeId::JEast),
            ShapeId::JEast => Some(ShapeId::JSouth),
            ShapeId::JSouth => Some(ShapeId::JWest),
            ShapeId::JWest => Some(ShapeId::JNorth),
            ShapeId::LNorth => Some(ShapeId::LEast),
            ShapeId::LEast => Some(ShapeId::LSouth),
            ShapeId::LSouth => Some(ShapeId::LWest),
            ShapeId::LWest => Some(ShapeId::LNorth),
        }
    }

    /// Color shared by every rotation of this shape's family.
    pub const fn color(self) -> PieceColor {
        match self {
            ShapeId::IVertical | ShapeId::IHorizontal => PieceColor::Cyan,
            ShapeId::O => PieceColor::Yellow,
            ShapeId::SHorizontal | ShapeId::SVertical => PieceColor::Green,
            ShapeId::ZHorizontal | ShapeId::ZVertical => PieceColor::Red,
            ShapeId::TNorth | ShapeId::TEast | ShapeId::TSouth | ShapeId::TWest => {
                PieceColor::Purple
            }
            ShapeId::JNorth | ShapeId::JEast | ShapeId::JSouth | ShapeId::JWest => {
                PieceColor::Blue
            }
            ShapeId::LNorth | ShapeId::LEast | ShapeId::LSouth | ShapeId::LWest => {
                PieceColor::Orange
            }
        }
    }

    /// Single-letter family name (`I`, `O`, `T`, `S`, `Z`, `J`, `L`).
    pub const fn letter(self) -> char {
        match self.color() {
            PieceColor::Cyan => 'I',
            PieceColor::Yellow => 'O',
            PieceColor::Purple => 'T',
            PieceColor::Green => 'S',
            PieceColor::Red => 'Z',
            PieceColor::Blue => 'J',
            PieceColor::Orange => 'L',
        }
    }
}

/// Game actions that can be applied to a session
///
/// Every key the player presses is translated into one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    MoveDown,
    /// Move piece down until it is blocked
    HardDrop,
    /// Advance the piece along the rotation graph
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start a new play-through
    Restart,
    /// Ask the caller to stop the game loop
    Quit,
}

impl GameAction {
    /// camelCase name used in log records
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}

/// How cleared rows turn into points
///
/// - **Linear**: `10 × lines`
/// - **Triangular**: `10 × lines(lines+1)/2`, rewarding simultaneous clears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringProfile {
    #[default]
    Linear,
    Triangular,
}

impl ScoringProfile {
    /// Parse a profile name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "linear" => Some(ScoringProfile::Linear),
            "triangular" => Some(ScoringProfile::Triangular),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringProfile::Linear => "linear",
            ScoringProfile::Triangular => "triangular",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_indices_match_catalog_order() {
        for (i, id) in ShapeId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn bag_holds_ids_one_through_seven() {
        let ids: Vec<usize> = ShapeId::BAG.iter().map(|s| s.index()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn rotation_keeps_family_color() {
        for id in ShapeId::ALL {
            if let Some(next) = id.successor() {
                assert_eq!(id.color(), next.color(), "{:?} -> {:?}", id, next);
            }
        }
    }

    #[test]
    fn speed_table_defaults() {
        assert_eq!(MAX_LEVEL, 6);
        assert_eq!(SPEED_TABLE_MS[0], 1000);
        assert_eq!(SPEED_TABLE_MS[5], SPEED_FLOOR_MS);
    }

    #[test]
    fn action_names_are_distinct_camel_case() {
        let names: Vec<&str> = [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::MoveDown,
            GameAction::HardDrop,
            GameAction::Rotate,
            GameAction::Pause,
            GameAction::Restart,
            GameAction::Quit,
        ]
        .iter()
        .map(|a| a.as_str())
        .collect();
        for (i, name) in names.iter().enumerate() {
            assert!(name.chars().next().is_some_and(|c| c.is_ascii_lowercase()));
            assert!(!names[..i].contains(name), "duplicate name {}", name);
        }
        assert_eq!(GameAction::MoveLeft.as_str(), "moveLeft");
    }

    #[test]
    fn scoring_profile_parse() {
        assert_eq!(ScoringProfile::from_str("Linear"), Some(ScoringProfile::Linear));
        assert_eq!(
            ScoringProfile::from_str("triangular"),
            Some(ScoringProfile::Triangular)
        );
        assert_eq!(ScoringProfile::from_str("nintendo"), None);
        assert_eq!(ScoringProfile::default(), ScoringProfile::Linear);
    }
}
