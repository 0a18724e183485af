use thiserror::Error;

use crate::core::data::colour::Colour;

pub const BYTES_PER_PIXEL: usize = 3;

fn dimensions_to_buffer_size(width: usize, height: usize) -> usize {
    width * height * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel at row:{row}, col:{col} outside of {width}x{height} buffer")]
    PixelOutsideBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
    #[error("expected buffer size {expected} does not match buffer size {buffer_size}")]
    BoundsMismatch { expected: usize, buffer_size: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB image, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; dimensions_to_buffer_size(width, height)],
        }
    }

    pub fn from_data(
        width: usize,
        height: usize,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = dimensions_to_buffer_size(width, height);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, row: usize, col: usize) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(row, col)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(
        &mut self,
        row: usize,
        col: usize,
        colour: Colour,
    ) -> Result<(), PixelBufferError> {
        let index = self.index_of(row, col)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize, PixelBufferError> {
        if row >= self.height || col >= self.width {
            return Err(PixelBufferError::PixelOutsideBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }

        Ok((row * self.width + col) * BYTES_PER_PIXEL)
    }
}
