use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::DensitySample;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::colour_mapping::kinds::DensityColourMapKind;
use crate::core::colour_mapping::map::{DensityColourMap, log_intensity};
use crate::core::data::colour::Colour;

/// Black through red, orange and yellow to white as density rises.
#[derive(Debug, Default)]
pub struct FireGradientColourMap;

impl ColourMap<DensitySample> for FireGradientColourMap {
    fn map(&self, sample: DensitySample) -> Result<Colour, ColourMapError> {
        let t = log_intensity(sample)?;

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl DensityColourMap for FireGradientColourMap {
    fn kind(&self) -> DensityColourMapKind {
        DensityColourMapKind::FireGradient
    }
}
