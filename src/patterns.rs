use crate::board::{Board, Cell};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A seed shape, given as `(x, y)` offsets from its own top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
];

impl Pattern {
    /// Bounding box `(width, height)` of the shape.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }
}

/// Clear the board and place `pattern` in its middle. Cells that fall off a
/// board smaller than the pattern are dropped.
pub fn apply_pattern(board: &mut Board, pattern: &Pattern) {
    board.clear();

    let (width, height) = board.dimensions();
    let (pw, ph) = pattern.extent();
    let left = width.saturating_sub(pw) / 2;
    let top = height.saturating_sub(ph) / 2;

    for &(dx, dy) in pattern.cells {
        let (x, y) = (left + dx, top + dy);
        if x < width && y < height {
            board.set(x, y, Cell::Alive);
        }
    }
}

/// Fill roughly a third of the board with live cells.
pub fn apply_random_pattern(board: &mut Board, seed_value: u64) {
    board.clear();

    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    let (width, height) = board.dimensions();
    for y in 0..height {
        for x in 0..width {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            if (seed >> 16) % 3 == 0 {
                board.set(x, y, Cell::Alive);
            }
        }
    }
}
