use log::debug;
use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::canvas::canvas::Canvas;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};

/// One canvas cell as seen by a colour map: its visit count and the
/// busiest cell's count, for normalising.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensitySample {
    pub count: u32,
    pub max_count: u32,
}

#[derive(Debug, Error)]
pub enum GeneratePixelBufferError {
    #[error("colour map error: {0}")]
    ColourMap(ColourMapError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Colours every canvas cell in parallel, keeping the canvas row order.
pub fn generate_pixel_buffer<CMap>(
    canvas: &Canvas,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap<DensitySample> + ?Sized,
{
    let max_count = canvas.max_count();

    let colours = canvas
        .cells()
        .par_iter()
        .map(|&count| mapper.map(DensitySample { count, max_count }))
        .collect::<Result<Vec<_>, _>>()
        .map_err(GeneratePixelBufferError::ColourMap)?;

    let data = colours
        .into_iter()
        .flat_map(|colour| [colour.r, colour.g, colour.b])
        .collect();

    debug!(
        "coloured {}x{} canvas with {}",
        canvas.width(),
        canvas.height(),
        mapper.display_name()
    );

    Ok(PixelBuffer::from_data(
        canvas.width(),
        canvas.height(),
        data,
    )?)
}
