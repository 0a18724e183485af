use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::DensitySample;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::colour_mapping::errors::DensityColourMapError;
use crate::core::colour_mapping::kinds::DensityColourMapKind;
use crate::core::colour_mapping::map::DensityColourMap;
use crate::core::data::colour::Colour;

/// White for any visited cell, black otherwise: the pixel version of the ASCII render.
#[derive(Debug, Default)]
pub struct BinaryColourMap;

impl ColourMap<DensitySample> for BinaryColourMap {
    fn map(&self, sample: DensitySample) -> Result<Colour, ColourMapError> {
        if sample.count > sample.max_count {
            return Err(Box::new(DensityColourMapError::CountExceedsMax {
                count: sample.count,
                max_count: sample.max_count,
            }));
        }

        Ok(if sample.count > 0 {
            Colour::WHITE
        } else {
            Colour::BLACK
        })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl DensityColourMap for BinaryColourMap {
    fn kind(&self) -> DensityColourMapKind {
        DensityColourMapKind::Binary
    }
}
