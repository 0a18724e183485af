use std::fmt;

use rand::Rng;

use crate::core::data::vector2d::Vector2D;
use crate::core::transforms::affine::AffineTransform2D;
use crate::core::transforms::julia::JuliaTransform;

/// Header tag of a description file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Affine2D,
    Julia,
}

impl TransformKind {
    pub const ALL: &'static [Self] = &[Self::Affine2D, Self::Julia];

    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Affine2D => "Affine2D",
            Self::Julia => "Julia",
        }
    }

    /// Case-insensitive lookup of a header token.
    #[must_use]
    pub fn from_header(token: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.header().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Transform {
    Affine(AffineTransform2D),
    Julia(JuliaTransform),
}

impl Transform {
    /// Julia transforms draw their sign from `rng` when it is random;
    /// affine transforms never touch it.
    pub fn apply<R: Rng>(&self, point: Vector2D, rng: &mut R) -> Vector2D {
        match self {
            Self::Affine(affine) => affine.apply(point),
            Self::Julia(julia) => julia.apply(point, rng),
        }
    }

    /// Relative selection weight. Julia transforms are always weighted 1.
    #[must_use]
    pub fn weight(&self) -> f64 {
        match self {
            Self::Affine(affine) => affine.weight(),
            Self::Julia(_) => 1.0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TransformKind {
        match self {
            Self::Affine(_) => TransformKind::Affine2D,
            Self::Julia(_) => TransformKind::Julia,
        }
    }
}

impl From<AffineTransform2D> for Transform {
    fn from(affine: AffineTransform2D) -> Self {
        Self::Affine(affine)
    }
}

impl From<JuliaTransform> for Transform {
    fn from(julia: JuliaTransform) -> Self {
        Self::Julia(julia)
    }
}
