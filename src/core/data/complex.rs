use std::ops::Sub;

use crate::core::data::vector2d::Vector2D;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[must_use]
    pub fn argument(&self) -> f64 {
        self.imag.atan2(self.real)
    }

    /// Principal square root, taken in polar form: `sqrt(|z|) * e^(i * arg(z) / 2)`.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        let sqrt_magnitude = self.magnitude().sqrt();
        let angle = self.argument() / 2.0;

        Self {
            real: sqrt_magnitude * angle.cos(),
            imag: sqrt_magnitude * angle.sin(),
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl From<Vector2D> for Complex {
    fn from(v: Vector2D) -> Self {
        Self {
            real: v.x,
            imag: v.y,
        }
    }
}
