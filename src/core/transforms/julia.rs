use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::vector2d::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    Positive,
    Negative,
    /// One fair coin flip per application.
    #[default]
    Random,
}

impl Sign {
    pub fn resolve<R: Rng>(self, rng: &mut R) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
            Self::Random => {
                if rng.gen_bool(0.5) {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sign must be 1 or -1, got '{0}'")]
pub struct ParseSignError(pub String);

impl FromStr for Sign {
    type Err = ParseSignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "+1" => Ok(Self::Positive),
            "-1" => Ok(Self::Negative),
            other => Err(ParseSignError(other.to_string())),
        }
    }
}

/// Inverse step of `z -> z² + c`: maps `z` to `±sqrt(z - c)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaTransform {
    c: Complex,
    sign: Sign,
}

impl JuliaTransform {
    #[must_use]
    pub fn new(c: Complex, sign: Sign) -> Self {
        Self { c, sign }
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }

    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Applies the transform with an explicit `sign` of `1.0` or `-1.0`.
    #[must_use]
    pub fn apply_signed(&self, point: Vector2D, sign: f64) -> Vector2D {
        let root = (Complex::from(point) - self.c).sqrt();

        Vector2D::from(root).scale(sign)
    }

    pub fn apply<R: Rng>(&self, point: Vector2D, rng: &mut R) -> Vector2D {
        let sign = self.sign.resolve(rng);

        self.apply_signed(point, sign)
    }
}
