pub mod binary;
pub mod fire_gradient;
pub mod log_grayscale;
