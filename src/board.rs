// board.rs - The live grid of cells
//
// Cells are stored row-major in a flat vector (`y * width + x`), with `x` the
// column and `y` the row. Accessing a cell outside the grid is a bug in the
// caller and panics.

use std::fmt;

/// State of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn flipped(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }
}

/// The Game of Life grid.
///
/// Equality compares dimensions and cell contents only.
#[derive(Debug, Clone, Default)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    generation: u64,
    epoch: u64,
    version: u64, // bumped on every mutation
    base: u64,    // version of the board a step output was computed from
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Board {
    /// Create an all-dead board.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
            generation: 0,
            epoch: 0,
            version: 0,
            base: 0,
        }
    }

    /// Build a board with the listed `(x, y)` cells alive.
    pub fn with_alive(width: usize, height: usize, alive: &[(usize, usize)]) -> Self {
        let mut board = Self::new(width, height);
        for &(x, y) in alive {
            board.set(x, y, Cell::Alive);
        }
        board
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of bounds for {}x{} board",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Reallocate to `width x height`, every cell dead. Earlier content is discarded.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::Dead; width * height];
        self.generation = 0;
        self.epoch += 1;
        self.version += 1;
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        self.version += 1;
    }

    /// Flip a cell and return its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Cell {
        let idx = self.index(x, y);
        self.cells[idx] = self.cells[idx].flipped();
        self.version += 1;
        self.cells[idx]
    }

    /// Kill every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        self.generation = 0;
        self.version += 1;
    }

    /// Swap in the next generation.
    ///
    /// `next` must have been computed from this board as it is now. If the
    /// board was resized, cleared or edited in the meantime, `next` is dropped
    /// and `false` is returned.
    pub fn replace_all(&mut self, next: Board) -> bool {
        if next.epoch != self.epoch
            || next.base != self.version
            || next.dimensions() != self.dimensions()
        {
            return false;
        }
        self.cells = next.cells;
        self.generation += 1;
        self.version += 1;
        true
    }

    /// Ticks applied since the last resize or clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of resizes this board has gone through.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Mutation counter; any change to the cells or dimensions moves it on.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Empty board with the same dimensions, used as a step output buffer.
    /// It remembers which version of `self` it was derived from.
    pub(crate) fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![Cell::Dead; self.cells.len()],
            generation: self.generation,
            epoch: self.epoch,
            version: 0,
            base: self.version,
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of all live cells, row by row.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(idx, _)| (idx % width, idx / width))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
