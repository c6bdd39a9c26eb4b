//! Pieces module - static shape catalog
//!
//! Each of the 19 catalog shapes is four `(row, col)` offsets from a local
//! origin. Rotation does not transform geometry at runtime; it walks the
//! rotation graph in [`ShapeId::successor`] and instantiates the target shape.

use crate::types::{Point, ShapeId, PIECE_CELLS};

/// Offsets of a shape's cells relative to its local origin
pub type ShapeOffsets = [(i32, i32); PIECE_CELLS];

/// Catalog indexed by [`ShapeId::index`]
const CATALOG: [ShapeOffsets; 19] = [
    // 0: |
    //    |
    //    |
    //    |
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    // 1: ----
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    // 2: --
    //    --
    [(0, 0), (0, 1), (1, 0), (1, 1)],
    // 3:  --
    //    --
    [(1, 0), (1, 1), (0, 1), (0, 2)],
    // 4:  -
    //    ---
    [(1, 0), (1, 1), (1, 2), (0, 1)],
    // 5: -
    //    ---
    [(1, 0), (1, 1), (1, 2), (0, 0)],
    // 6:   -
    //    ---
    [(1, 0), (1, 1), (1, 2), (0, 2)],
    // 7: --
    //     --
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    // 8: |
    //    ||
    //     |
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    // 9: |
    //    ||
    //    |
    [(0, 0), (1, 0), (1, 1), (2, 0)],
    // 10: ---
    //      -
    [(0, 0), (0, 1), (0, 2), (1, 1)],
    // 11:  |
    //     ||
    //      |
    [(0, 1), (1, 0), (1, 1), (2, 1)],
    // 12: ||
    //     |
    //     |
    [(0, 0), (0, 1), (1, 0), (2, 0)],
    // 13: ---
    //       -
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    // 14:  |
    //      |
    //     ||
    [(0, 1), (1, 1), (2, 0), (2, 1)],
    // 15: |
    //     |
    //     ||
    [(0, 0), (1, 0), (2, 0), (2, 1)],
    // 16: ---
    //     -
    [(0, 0), (0, 1), (0, 2), (1, 0)],
    // 17: ||
    //      |
    //      |
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    // 18:  |
    //     ||
    //     |
    [(0, 1), (1, 0), (1, 1), (2, 0)],
];

/// Get the raw catalog offsets for a shape
pub fn shape_offsets(id: ShapeId) -> &'static ShapeOffsets {
    &CATALOG[id.index()]
}

/// Get a fresh copy of a shape's points at the local origin
pub fn shape_points(id: ShapeId) -> [Point; PIECE_CELLS] {
    shape_offsets(id).map(|(row, col)| Point::new(row, col))
}

/// Bounding box `(rows, cols)` of a shape
pub fn shape_extent(id: ShapeId) -> (i32, i32) {
    let offsets = shape_offsets(id);
    let rows = offsets.iter().map(|&(r, _)| r).max().unwrap_or(0) + 1;
    let cols = offsets.iter().map(|&(_, c)| c).max().unwrap_or(0) + 1;
    (rows, cols)
}
