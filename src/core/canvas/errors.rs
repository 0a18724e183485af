use thiserror::Error;

use crate::core::canvas::canvas::Cell;
use crate::core::data::vector2d::Vector2D;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    #[error("canvas size must be positive: {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("canvas of {width}x{height} cells is too large to allocate")]
    TooLarge { width: usize, height: usize },
    #[error("canvas window must be finite and non-empty: min {min}, max {max}")]
    InvalidWindow { min: Vector2D, max: Vector2D },
    #[error("cell at row:{}, col:{} outside of {width}x{height} canvas", cell.row, cell.col)]
    CellOutOfBounds {
        cell: Cell,
        width: usize,
        height: usize,
    },
}
