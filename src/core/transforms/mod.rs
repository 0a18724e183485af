pub mod affine;
pub mod julia;
pub mod transform;
