use thiserror::Error;

use crate::core::canvas::errors::CanvasError;
use crate::core::data::vector2d::Vector2D;

/// A description that parsed fine but cannot drive a game.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidDescriptionError {
    #[error("description has no transforms")]
    EmptyTransforms,
    #[error("coordinate window is not finite: min {min}, max {max}")]
    NonFiniteWindow { min: Vector2D, max: Vector2D },
    #[error("coordinate window is inverted or empty: min {min}, max {max}")]
    InvertedWindow { min: Vector2D, max: Vector2D },
    #[error("transform {index} has invalid weight {weight}")]
    InvalidWeight { index: usize, weight: f64 },
    #[error("transform weights sum to zero")]
    ZeroTotalWeight,
    #[error("transform weights cannot be sampled, their total is {total}")]
    UnsampleableWeights { total: f64 },
    #[error("description mixes affine and julia transforms")]
    MixedTransformKinds,
    #[error("invalid canvas: {0}")]
    Canvas(#[from] CanvasError),
}
