use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::DensitySample;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::colour_mapping::errors::DensityColourMapError;
use crate::core::colour_mapping::kinds::DensityColourMapKind;
use crate::core::data::colour::Colour;

pub trait DensityColourMap: ColourMap<DensitySample> + Send + Sync {
    fn kind(&self) -> DensityColourMapKind;
}

impl ColourMap<DensitySample> for Box<dyn DensityColourMap> {
    fn map(&self, value: DensitySample) -> Result<Colour, ColourMapError> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// Log-scaled density in `[0, 1]`, so sparse cells stay visible next to hot ones.
pub(crate) fn log_intensity(sample: DensitySample) -> Result<f64, DensityColourMapError> {
    let DensitySample { count, max_count } = sample;

    if count > max_count {
        return Err(DensityColourMapError::CountExceedsMax { count, max_count });
    }

    if max_count == 0 {
        return Ok(0.0);
    }

    Ok(f64::from(count).ln_1p() / f64::from(max_count).ln_1p())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_intensity_bounds() {
        let empty = DensitySample {
            count: 0,
            max_count: 10,
        };
        let full = DensitySample {
            count: 10,
            max_count: 10,
        };

        assert_eq!(log_intensity(empty), Ok(0.0));
        assert_eq!(log_intensity(full), Ok(1.0));
    }

    #[test]
    fn test_log_intensity_on_empty_canvas() {
        let sample = DensitySample {
            count: 0,
            max_count: 0,
        };

        assert_eq!(log_intensity(sample), Ok(0.0));
    }

    #[test]
    fn test_log_intensity_rejects_count_over_max() {
        let sample = DensitySample {
            count: 3,
            max_count: 2,
        };

        assert_eq!(
            log_intensity(sample),
            Err(DensityColourMapError::CountExceedsMax {
                count: 3,
                max_count: 2
            })
        );
    }
}
