pub mod actions;
pub mod canvas;
pub mod colour_mapping;
pub mod data;
pub mod description;
pub mod fractals;
pub mod game;
pub mod transforms;
