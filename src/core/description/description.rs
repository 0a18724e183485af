use crate::core::data::vector2d::Vector2D;
use crate::core::description::errors::InvalidDescriptionError;
use crate::core::transforms::transform::{Transform, TransformKind};

/// Coordinate window plus the ordered transforms of one fractal.
///
/// Construction never fails; [`ChaosGameDescription::validate`] is run when a
/// game is built from it, so a syntactically valid file can still be loaded
/// and inspected even if it cannot be played.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaosGameDescription {
    min_coords: Vector2D,
    max_coords: Vector2D,
    transforms: Vec<Transform>,
}

impl ChaosGameDescription {
    #[must_use]
    pub fn new(min_coords: Vector2D, max_coords: Vector2D, transforms: Vec<Transform>) -> Self {
        Self {
            min_coords,
            max_coords,
            transforms,
        }
    }

    #[must_use]
    pub fn min_coords(&self) -> Vector2D {
        self.min_coords
    }

    #[must_use]
    pub fn max_coords(&self) -> Vector2D {
        self.max_coords
    }

    #[must_use]
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Kind shared by every transform; `None` when empty or mixed.
    #[must_use]
    pub fn kind(&self) -> Option<TransformKind> {
        let first = self.transforms.first()?.kind();

        self.transforms
            .iter()
            .all(|t| t.kind() == first)
            .then_some(first)
    }

    #[must_use]
    pub fn weights(&self) -> Vec<f64> {
        self.transforms.iter().map(Transform::weight).collect()
    }

    pub fn validate(&self) -> Result<(), InvalidDescriptionError> {
        let (min, max) = (self.min_coords, self.max_coords);

        if self.transforms.is_empty() {
            return Err(InvalidDescriptionError::EmptyTransforms);
        }

        if !min.is_finite() || !max.is_finite() {
            return Err(InvalidDescriptionError::NonFiniteWindow { min, max });
        }

        if min.x >= max.x || min.y >= max.y {
            return Err(InvalidDescriptionError::InvertedWindow { min, max });
        }

        if self.kind().is_none() {
            return Err(InvalidDescriptionError::MixedTransformKinds);
        }

        for (index, weight) in self.weights().into_iter().enumerate() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(InvalidDescriptionError::InvalidWeight { index, weight });
            }
        }

        let total = self.weights().iter().sum::<f64>();

        if total <= 0.0 {
            return Err(InvalidDescriptionError::ZeroTotalWeight);
        }

        if !total.is_finite() {
            return Err(InvalidDescriptionError::UnsampleableWeights { total });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::matrix2x2::Matrix2x2;
    use crate::core::transforms::affine::AffineTransform2D;
    use crate::core::transforms::julia::{JuliaTransform, Sign};

    fn affine(weight: f64) -> Transform {
        AffineTransform2D::new(Matrix2x2::new(0.5, 0.0, 0.0, 0.5), Vector2D::ORIGIN)
            .with_weight(weight)
            .into()
    }

    fn unit_window(transforms: Vec<Transform>) -> ChaosGameDescription {
        ChaosGameDescription::new(Vector2D::new(0.0, 0.0), Vector2D::new(1.0, 1.0), transforms)
    }

    #[test]
    fn test_valid_description() {
        let description = unit_window(vec![affine(1.0), affine(2.0)]);

        assert_eq!(description.validate(), Ok(()));
        assert_eq!(description.kind(), Some(TransformKind::Affine2D));
        assert_eq!(description.weights(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_empty_transforms_rejected() {
        let description = unit_window(vec![]);

        assert_eq!(
            description.validate(),
            Err(InvalidDescriptionError::EmptyTransforms)
        );
    }

    #[test]
    fn test_inverted_window_rejected() {
        let min = Vector2D::new(1.0, 0.0);
        let max = Vector2D::new(0.0, 1.0);
        let description = ChaosGameDescription::new(min, max, vec![affine(1.0)]);

        assert_eq!(
            description.validate(),
            Err(InvalidDescriptionError::InvertedWindow { min, max })
        );
    }

    #[test]
    fn test_degenerate_window_rejected() {
        let min = Vector2D::new(0.0, 0.5);
        let max = Vector2D::new(1.0, 0.5);
        let description = ChaosGameDescription::new(min, max, vec![affine(1.0)]);

        assert!(matches!(
            description.validate(),
            Err(InvalidDescriptionError::InvertedWindow { .. })
        ));
    }

    #[test]
    fn test_non_finite_window_rejected() {
        let min = Vector2D::new(f64::NAN, 0.0);
        let max = Vector2D::new(1.0, 1.0);
        let description = ChaosGameDescription::new(min, max, vec![affine(1.0)]);

        assert!(matches!(
            description.validate(),
            Err(InvalidDescriptionError::NonFiniteWindow { .. })
        ));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let description = unit_window(vec![affine(1.0), affine(-0.5)]);

        assert_eq!(
            description.validate(),
            Err(InvalidDescriptionError::InvalidWeight {
                index: 1,
                weight: -0.5
            })
        );
    }

    #[test]
    fn test_all_zero_weights_rejected() {
        let description = unit_window(vec![affine(0.0), affine(0.0)]);

        assert_eq!(
            description.validate(),
            Err(InvalidDescriptionError::ZeroTotalWeight)
        );
    }

    #[test]
    fn test_overflowing_weight_total_rejected() {
        let description = unit_window(vec![affine(1e308), affine(1e308)]);

        assert_eq!(
            description.validate(),
            Err(InvalidDescriptionError::UnsampleableWeights {
                total: f64::INFINITY
            })
        );
    }

    #[test]
    fn test_mixed_kinds_rejected() {
        let julia = JuliaTransform::new(Complex::default(), Sign::Random).into();
        let description = unit_window(vec![affine(1.0), julia]);

        assert_eq!(description.kind(), None);
        assert_eq!(
            description.validate(),
            Err(InvalidDescriptionError::MixedTransformKinds)
        );
    }
}
