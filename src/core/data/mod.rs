pub mod colour;
pub mod complex;
pub mod matrix2x2;
pub mod pixel_buffer;
pub mod vector2d;
