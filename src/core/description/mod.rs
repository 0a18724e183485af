pub mod description;
pub mod errors;
