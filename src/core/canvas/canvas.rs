use std::fmt;

use crate::core::canvas::errors::CanvasError;
use crate::core::data::vector2d::Vector2D;

pub const VISITED_GLYPH: char = '*';
pub const EMPTY_GLYPH: char = ' ';

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// Visit counts over a `width x height` raster covering `[min_coords, max_coords]`.
///
/// Row 0 is the top of the window (largest y); column 0 is the left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    min_coords: Vector2D,
    max_coords: Vector2D,
    counts: Vec<u32>,
}

impl Canvas {
    pub fn new(
        width: usize,
        height: usize,
        min_coords: Vector2D,
        max_coords: Vector2D,
    ) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::ZeroDimension { width, height });
        }

        let window_ok = min_coords.is_finite()
            && max_coords.is_finite()
            && min_coords.x < max_coords.x
            && min_coords.y < max_coords.y;

        if !window_ok {
            return Err(CanvasError::InvalidWindow {
                min: min_coords,
                max: max_coords,
            });
        }

        let too_large = || CanvasError::TooLarge { width, height };
        let len = width.checked_mul(height).ok_or_else(too_large)?;

        let mut counts = Vec::new();
        counts.try_reserve_exact(len).map_err(|_| too_large())?;
        counts.resize(len, 0);

        Ok(Self {
            width,
            height,
            min_coords,
            max_coords,
            counts,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn min_coords(&self) -> Vector2D {
        self.min_coords
    }

    #[must_use]
    pub fn max_coords(&self) -> Vector2D {
        self.max_coords
    }

    /// Row-major visit counts, `height` rows of `width` cells.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.counts
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.counts.chunks(self.width)
    }

    /// Maps a window coordinate to its cell. Points outside the window are
    /// clamped to the nearest edge cell; a NaN component maps to index 0.
    #[must_use]
    pub fn coord_to_cell(&self, point: Vector2D) -> Cell {
        let span_x = self.max_coords.x - self.min_coords.x;
        let span_y = self.max_coords.y - self.min_coords.y;

        let col = (point.x - self.min_coords.x) / span_x * self.width as f64;
        let row = (self.max_coords.y - point.y) / span_y * self.height as f64;

        Cell {
            row: clamp_to_index(row, self.height),
            col: clamp_to_index(col, self.width),
        }
    }

    #[must_use]
    pub fn count(&self, cell: Cell) -> Option<u32> {
        self.index_of(cell).map(|index| self.counts[index])
    }

    pub fn mark_cell(&mut self, cell: Cell) -> Result<(), CanvasError> {
        let index = self.index_of(cell).ok_or(CanvasError::CellOutOfBounds {
            cell,
            width: self.width,
            height: self.height,
        })?;

        self.counts[index] = self.counts[index].saturating_add(1);
        Ok(())
    }

    /// Clamps `point` into the raster and counts a visit there.
    pub fn mark_point(&mut self, point: Vector2D) -> Cell {
        let cell = self.coord_to_cell(point);
        let index = cell.row * self.width + cell.col;

        self.counts[index] = self.counts[index].saturating_add(1);
        cell
    }

    pub fn clear(&mut self) {
        self.counts.fill(0);
    }

    #[must_use]
    pub fn visited_cells(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);

        for row in self.rows() {
            out.extend(row.iter().map(|&count| {
                if count > 0 {
                    VISITED_GLYPH
                } else {
                    EMPTY_GLYPH
                }
            }));
            out.push('\n');
        }

        out
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        (cell.row < self.height && cell.col < self.width).then(|| cell.row * self.width + cell.col)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_ascii())
    }
}

fn clamp_to_index(position: f64, len: usize) -> usize {
    if position.is_nan() {
        return 0;
    }

    // `as` saturates, so +inf lands on usize::MAX before the min.
    (position.floor().max(0.0) as usize).min(len - 1)
}
