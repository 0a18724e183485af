use crate::core::data::matrix2x2::Matrix2x2;
use crate::core::data::vector2d::Vector2D;

pub const DEFAULT_WEIGHT: f64 = 1.0;

/// `p -> matrix * p + translation`, picked with probability proportional to `weight`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AffineTransform2D {
    matrix: Matrix2x2,
    translation: Vector2D,
    weight: f64,
}

impl AffineTransform2D {
    #[must_use]
    pub fn new(matrix: Matrix2x2, translation: Vector2D) -> Self {
        Self {
            matrix,
            translation,
            weight: DEFAULT_WEIGHT,
        }
    }

    #[must_use]
    pub fn with_weight(self, weight: f64) -> Self {
        Self { weight, ..self }
    }

    #[must_use]
    pub fn matrix(&self) -> Matrix2x2 {
        self.matrix
    }

    #[must_use]
    pub fn translation(&self) -> Vector2D {
        self.translation
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn apply(&self, point: Vector2D) -> Vector2D {
        self.matrix.multiply(point) + self.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_scales_then_translates() {
        let transform = AffineTransform2D::new(
            Matrix2x2::new(0.5, 0.0, 0.0, 0.5),
            Vector2D::new(0.25, 0.5),
        );

        assert_eq!(
            transform.apply(Vector2D::new(1.0, 1.0)),
            Vector2D::new(0.75, 1.0)
        );
    }

    #[test]
    fn test_apply_with_rotation_matrix() {
        // quarter turn counter-clockwise
        let transform =
            AffineTransform2D::new(Matrix2x2::new(0.0, -1.0, 1.0, 0.0), Vector2D::ORIGIN);

        assert_eq!(
            transform.apply(Vector2D::new(1.0, 0.0)),
            Vector2D::new(0.0, 1.0)
        );
    }

    #[test]
    fn test_default_weight_is_one() {
        let transform = AffineTransform2D::new(Matrix2x2::IDENTITY, Vector2D::ORIGIN);

        assert_eq!(transform.weight(), 1.0);
        assert_eq!(transform.with_weight(0.85).weight(), 0.85);
    }

    #[test]
    fn test_apply_propagates_nan() {
        let transform = AffineTransform2D::new(Matrix2x2::IDENTITY, Vector2D::ORIGIN);

        assert!(transform.apply(Vector2D::new(f64::NAN, 0.0)).is_nan());
    }
}
