// grid.rs - Viewport-to-grid geometry for the Game of Life board
//
// All positions are in points relative to the top-left corner of the drawing area.

use egui::{Pos2, Rect, Vec2, pos2};

use crate::config::Config;

/// Spacing constants used to lay the grid out inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub outer_space: f32,
    pub outer_border: f32,
    pub square_border: f32,
    pub square_size: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Geometry {
    pub fn from_config(config: &Config) -> Self {
        Self {
            outer_space: config.outer_space,
            outer_border: config.outer_border,
            square_border: config.square_border,
            square_size: config.square_size,
        }
    }

    /// Space taken by one square including the border on either side of it.
    pub fn footprint(&self) -> f32 {
        self.square_size + 2.0 * self.square_border
    }

    /// Space reserved around the grid along one axis (both sides).
    pub fn reserved_margin(&self) -> f32 {
        2.0 * (self.outer_space + self.outer_border)
    }

    /// Offset of the first square from the viewport edge.
    pub fn leading_offset(&self) -> f32 {
        self.outer_space + self.outer_border + self.square_border
    }

    /// Largest number of squares that fit along a viewport axis of `length` points.
    ///
    /// Lengths smaller than the reserved margin (and non-finite lengths) give 0.
    pub fn grid_dimension(&self, length: f32) -> usize {
        let usable = length - self.reserved_margin();
        if !usable.is_finite() || usable <= 0.0 {
            return 0;
        }
        (usable / self.footprint()).floor() as usize
    }

    /// Grid size `(width, height)` in squares for a viewport of `size` points.
    pub fn grid_size(&self, size: Vec2) -> (usize, usize) {
        (self.grid_dimension(size.x), self.grid_dimension(size.y))
    }

    /// Pixel rectangle of square `(x, y)`.
    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        let lead = self.leading_offset();
        let step = self.footprint();
        Rect::from_min_size(
            pos2(lead + x as f32 * step, lead + y as f32 * step),
            Vec2::splat(self.square_size),
        )
    }

    /// Outline of the outer border, inset by half the stroke width so the
    /// stroke lands fully inside the outer spacing.
    pub fn outer_border_rect(&self, width: usize, height: usize) -> Rect {
        let origin = self.outer_space + self.outer_border / 2.0;
        Rect::from_min_size(
            pos2(origin, origin),
            Vec2::new(
                self.outer_border + width as f32 * self.footprint(),
                self.outer_border + height as f32 * self.footprint(),
            ),
        )
    }

    /// Area filled with the grid-line color before the squares are drawn over it.
    pub fn inner_area_rect(&self, width: usize, height: usize) -> Rect {
        let origin = self.outer_space + self.outer_border;
        Rect::from_min_size(
            pos2(origin, origin),
            Vec2::new(
                width as f32 * self.footprint(),
                height as f32 * self.footprint(),
            ),
        )
    }
}

/// Cached rectangles for every square of a `width x height` board.
#[derive(Debug, Clone, Default)]
pub struct CellRects {
    width: usize,
    height: usize,
    rects: Vec<Rect>, // row-major, same layout as the board
}

impl CellRects {
    pub fn new(geometry: &Geometry, width: usize, height: usize) -> Self {
        let mut rects = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                rects.push(geometry.cell_rect(x, y));
            }
        }
        Self { width, height, rects }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, x: usize, y: usize) -> Rect {
        assert!(
            x < self.width && y < self.height,
            "rect ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        self.rects[y * self.width + x]
    }

    /// Square containing `point`, if any. Squares never overlap, so the first
    /// match is the only match.
    pub fn hit(&self, point: Pos2) -> Option<(usize, usize)> {
        self.rects
            .iter()
            .position(|rect| rect.contains(point))
            .map(|idx| (idx % self.width, idx / self.width))
    }

    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Rect)> + '_ {
        let width = self.width;
        self.rects
            .iter()
            .enumerate()
            .map(move |(idx, rect)| ((idx % width, idx / width), *rect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_matches_margin_and_footprint() {
        let g = Geometry::default();
        // 500 - 44 = 456, 456 / 17 = 26.8
        assert_eq!(g.grid_dimension(500.0), 26);
        assert_eq!(g.grid_dimension(44.0 + 17.0), 1);
        assert_eq!(g.grid_dimension(44.0 + 16.9), 0);
    }

    #[test]
    fn dimension_clamps_to_zero_below_margin() {
        let g = Geometry::default();
        assert_eq!(g.grid_dimension(0.0), 0);
        assert_eq!(g.grid_dimension(10.0), 0);
        assert_eq!(g.grid_dimension(44.0), 0);
        assert_eq!(g.grid_dimension(-300.0), 0);
        assert_eq!(g.grid_dimension(f32::NAN), 0);
    }

    #[test]
    fn cell_rect_origin_and_size() {
        let g = Geometry::default();
        let first = g.cell_rect(0, 0);
        assert_eq!(first.min, pos2(23.0, 23.0));
        assert_eq!(first.size(), Vec2::splat(15.0));

        let other = g.cell_rect(2, 3);
        assert_eq!(other.min, pos2(23.0 + 2.0 * 17.0, 23.0 + 3.0 * 17.0));
    }

    #[test]
    fn rects_do_not_overlap() {
        let g = Geometry::default();
        let a = g.cell_rect(0, 0);
        let b = g.cell_rect(1, 0);
        assert!(a.max.x < b.min.x);
    }

    #[test]
    fn hit_finds_square_and_misses_margin() {
        let g = Geometry::default();
        let rects = CellRects::new(&g, 4, 3);
        let centre = g.cell_rect(3, 2).center();
        assert_eq!(rects.hit(centre), Some((3, 2)));
        assert_eq!(rects.hit(pos2(5.0, 5.0)), None);
        // Grid line between two squares
        assert_eq!(rects.hit(pos2(23.0 + 16.0, 30.0)), None);
    }

    #[test]
    fn empty_cache_never_hits() {
        let rects = CellRects::new(&Geometry::default(), 0, 0);
        assert_eq!(rects.hit(pos2(30.0, 30.0)), None);
        assert_eq!(rects.iter().count(), 0);
    }
}
