pub mod description_file;
pub mod errors;
