//! RNG module - uniform piece selection
//!
//! New pieces are drawn uniformly from the seven bag shapes. Draws are
//! independent, so the same shape can come up several times in a row.
//!
//! The generator is a small seeded LCG so a session replays identically for
//! the same seed.

use crate::piece::Piece;
use crate::types::ShapeId;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (usable as a seed to continue the stream)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Picks the next falling piece
#[derive(Debug, Clone)]
pub struct PiecePicker {
    rng: SimpleRng,
}

impl PiecePicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Choose a bag shape uniformly at random
    pub fn next_shape(&mut self) -> ShapeId {
        let idx = self.rng.next_range(ShapeId::BAG.len() as u32) as usize;
        ShapeId::BAG[idx]
    }

    /// Pick a fresh piece centered horizontally on a board of `board_width`
    pub fn pick(&mut self, board_width: usize) -> Piece {
        spawn(self.next_shape(), board_width)
    }

    /// Seed that continues this picker's stream
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PiecePicker {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Place a catalog shape at the spawn position: row 0, column `width/2 - 1`
pub fn spawn(id: ShapeId, board_width: usize) -> Piece {
    let col = (board_width / 2) as i32 - 1;
    Piece::from_shape(id).translated(0, col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_picker_only_yields_bag_shapes() {
        let mut picker = PiecePicker::new(99);
        for _ in 0..500 {
            let id = picker.next_shape();
            assert!(ShapeId::BAG.contains(&id), "{:?}", id);
        }
    }

    #[test]
    fn test_picker_reaches_every_bag_shape() {
        let mut picker = PiecePicker::new(3);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let id = picker.next_shape();
            let i = ShapeId::BAG.iter().position(|b| *b == id).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|s| *s), "seen: {:?}", seen);
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let mut a = PiecePicker::new(42);
        let mut b = PiecePicker::new(42);
        for _ in 0..50 {
            assert_eq!(a.pick(10), b.pick(10));
        }
    }

    #[test]
    fn test_pick_is_centered_and_fresh() {
        let mut picker = PiecePicker::new(5);
        let piece = picker.pick(10);
        assert_eq!(piece.moves(), 0);
        assert_eq!(piece.points().iter().map(|p| p.col).min(), Some(4));
        assert_eq!(piece.points().iter().map(|p| p.row).min(), Some(0));
    }

    #[test]
    fn test_spawn_offset() {
        let piece = spawn(ShapeId::IHorizontal, 10);
        assert_eq!(
            piece.points(),
            &[
                Point::new(0, 4),
                Point::new(0, 5),
                Point::new(0, 6),
                Point::new(0, 7)
            ]
        );
    }

    proptest::proptest! {
        #[test]
        fn prop_next_range_in_bounds(seed in proptest::num::u32::ANY, max in 1u32..1000) {
            let mut rng = SimpleRng::new(seed);
            for _ in 0..32 {
                proptest::prop_assert!(rng.next_range(max) < max);
            }
        }

        #[test]
        fn prop_continued_seed_resumes_stream(seed in proptest::num::u32::ANY, skip in 0usize..64) {
            let mut picker = PiecePicker::new(seed);
            for _ in 0..skip {
                picker.next_shape();
            }
            let mut resumed = PiecePicker::new(picker.seed());
            for _ in 0..16 {
                proptest::prop_assert_eq!(picker.next_shape(), resumed.next_shape());
            }
        }
    }
}
