// engine.rs - Conway's rules applied to a whole board at once

use crate::board::{Board, Cell};

/// Count live cells among the up-to-8 neighbors of `(x, y)`. Neighbors outside
/// the board are simply missing; there is no wraparound.
pub fn live_neighbors(board: &Board, x: usize, y: usize) -> u8 {
    let (width, height) = board.dimensions();
    let mut count = 0;
    for ny in y.saturating_sub(1)..=(y + 1).min(height - 1) {
        for nx in x.saturating_sub(1)..=(x + 1).min(width - 1) {
            if (nx, ny) != (x, y) && board.get(nx, ny).is_alive() {
                count += 1;
            }
        }
    }
    count
}

/// Next state of a single cell given its current state and live-neighbor count.
pub fn next_state(current: Cell, neighbors: u8) -> Cell {
    match (current, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3) => Cell::Alive,                     // Birth
        _ => Cell::Dead,                                    // Death or stays dead
    }
}

/// Compute the next generation. Every cell is read from `board` and written to
/// a separate output board, so no cell sees a neighbor's new state.
pub fn step(board: &Board) -> Board {
    let mut next = board.blank_like();
    let (width, height) = board.dimensions();
    for y in 0..height {
        for x in 0..width {
            let state = next_state(board.get(x, y), live_neighbors(board, x, y));
            if state.is_alive() {
                next.set(x, y, state);
            }
        }
    }
    next
}
