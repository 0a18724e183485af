use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::DensitySample;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::colour_mapping::kinds::DensityColourMapKind;
use crate::core::colour_mapping::map::{DensityColourMap, log_intensity};
use crate::core::data::colour::Colour;

#[derive(Debug, Default)]
pub struct LogGrayscaleColourMap;

impl ColourMap<DensitySample> for LogGrayscaleColourMap {
    fn map(&self, sample: DensitySample) -> Result<Colour, ColourMapError> {
        let intensity = log_intensity(sample)?;

        Ok(Colour::grey((intensity * 255.0).round() as u8))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl DensityColourMap for LogGrayscaleColourMap {
    fn kind(&self) -> DensityColourMapKind {
        DensityColourMapKind::LogGrayscale
    }
}
