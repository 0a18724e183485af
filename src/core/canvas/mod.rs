pub mod canvas;
pub mod errors;
