use crate::core::data::vector2d::Vector2D;

/// Row-major 2x2 matrix: `[[a00, a01], [a10, a11]]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix2x2 {
    pub a00: f64,
    pub a01: f64,
    pub a10: f64,
    pub a11: f64,
}

impl Matrix2x2 {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(a00: f64, a01: f64, a10: f64, a11: f64) -> Self {
        Self { a00, a01, a10, a11 }
    }

    #[must_use]
    pub fn multiply(&self, vector: Vector2D) -> Vector2D {
        Vector2D {
            x: self.a00 * vector.x + self.a01 * vector.y,
            y: self.a10 * vector.x + self.a11 * vector.y,
        }
    }
}
