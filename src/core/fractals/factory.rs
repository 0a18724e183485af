use crate::core::data::complex::Complex;
use crate::core::data::matrix2x2::Matrix2x2;
use crate::core::data::vector2d::Vector2D;
use crate::core::description::description::ChaosGameDescription;
use crate::core::fractals::presets::FractalPreset;
use crate::core::transforms::affine::AffineTransform2D;
use crate::core::transforms::julia::{JuliaTransform, Sign};
use crate::core::transforms::transform::Transform;

pub const JULIA_MIN_COORDS: Vector2D = Vector2D::new(-1.6, -1.0);
pub const JULIA_MAX_COORDS: Vector2D = Vector2D::new(1.6, 1.0);

#[must_use]
pub fn description_factory(preset: FractalPreset) -> ChaosGameDescription {
    match preset {
        FractalPreset::SierpinskiTriangle => sierpinski_triangle(),
        FractalPreset::BarnsleyFern => barnsley_fern(),
        FractalPreset::KochCurve => koch_curve(),
        FractalPreset::DragonCurve => dragon_curve(),
        FractalPreset::JuliaSet => julia_set(Complex {
            real: -0.74543,
            imag: 0.11301,
        }),
        FractalPreset::JuliaPetals => julia_set(Complex {
            real: -0.4,
            imag: 0.6,
        }),
        FractalPreset::JuliaLightning => julia_set(Complex {
            real: -0.8,
            imag: 0.156,
        }),
        FractalPreset::JuliaDust => julia_set(Complex {
            real: -0.70176,
            imag: -0.3842,
        }),
        FractalPreset::JuliaSpiral => julia_set(Complex {
            real: -0.835,
            imag: -0.2321,
        }),
    }
}

#[must_use]
pub fn affine_custom(
    min_coords: Vector2D,
    max_coords: Vector2D,
    transforms: Vec<AffineTransform2D>,
) -> ChaosGameDescription {
    ChaosGameDescription::new(
        min_coords,
        max_coords,
        transforms.into_iter().map(Transform::from).collect(),
    )
}

#[must_use]
pub fn julia_custom(
    min_coords: Vector2D,
    max_coords: Vector2D,
    c: Complex,
    sign: Sign,
) -> ChaosGameDescription {
    ChaosGameDescription::new(
        min_coords,
        max_coords,
        vec![JuliaTransform::new(c, sign).into()],
    )
}

/// Julia description over the standard window with a random sign per step.
#[must_use]
pub fn julia_set(c: Complex) -> ChaosGameDescription {
    julia_custom(JULIA_MIN_COORDS, JULIA_MAX_COORDS, c, Sign::Random)
}

fn affine(a00: f64, a01: f64, a10: f64, a11: f64, tx: f64, ty: f64) -> AffineTransform2D {
    AffineTransform2D::new(Matrix2x2::new(a00, a01, a10, a11), Vector2D::new(tx, ty))
}

#[must_use]
pub fn sierpinski_triangle() -> ChaosGameDescription {
    let weight = 1.0 / 3.0;

    affine_custom(
        Vector2D::new(0.0, 0.0),
        Vector2D::new(1.0, 1.0),
        vec![
            affine(0.5, 0.0, 0.0, 0.5, 0.0, 0.0).with_weight(weight),
            affine(0.5, 0.0, 0.0, 0.5, 0.5, 0.0).with_weight(weight),
            affine(0.5, 0.0, 0.0, 0.5, 0.25, 0.5).with_weight(weight),
        ],
    )
}

#[must_use]
pub fn barnsley_fern() -> ChaosGameDescription {
    affine_custom(
        Vector2D::new(-2.1820, 0.0),
        Vector2D::new(2.6558, 9.9983),
        vec![
            affine(0.0, 0.0, 0.0, 0.16, 0.0, 0.0).with_weight(0.01),
            affine(0.85, 0.04, -0.04, 0.85, 0.0, 1.60).with_weight(0.85),
            affine(0.20, -0.26, 0.23, 0.22, 0.0, 1.60).with_weight(0.07),
            affine(-0.15, 0.28, 0.26, 0.24, 0.0, 0.44).with_weight(0.07),
        ],
    )
}

#[must_use]
pub fn koch_curve() -> ChaosGameDescription {
    affine_custom(
        Vector2D::new(-0.5, -0.5),
        Vector2D::new(1.5, 1.5),
        vec![
            affine(0.3333, 0.0, 0.0, 0.3333, 0.0, 0.0),
            affine(0.3333, 0.0, 0.0, 0.3333, 0.3333, 0.0),
            affine(0.16667, 0.288675, -0.288675, 0.16667, 0.5, 0.288675),
            affine(0.3333, 0.0, 0.0, 0.3333, 0.66667, 0.0),
        ],
    )
}

#[must_use]
pub fn dragon_curve() -> ChaosGameDescription {
    affine_custom(
        Vector2D::new(-1.0, -1.0),
        Vector2D::new(1.0, 1.0),
        vec![
            affine(0.5, -0.5, 0.5, 0.5, 0.0, 0.0),
            affine(0.5, 0.5, -0.5, 0.5, 0.5, 0.0),
        ],
    )
}
