pub mod factory;
pub mod presets;
