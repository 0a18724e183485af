mod controllers;
mod core;
mod presenters;
mod storage;

pub use crate::controllers::cli::command::{Command, HELP};
pub use crate::controllers::cli::controller::{CliController, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use crate::controllers::cli::errors::CliError;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_STEPS, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    DensitySample, GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
pub use crate::core::actions::run_games_parallel::run_games_parallel;
pub use crate::core::canvas::canvas::{Canvas, Cell, EMPTY_GLYPH, VISITED_GLYPH};
pub use crate::core::canvas::errors::CanvasError;
pub use crate::core::colour_mapping::errors::DensityColourMapError;
pub use crate::core::colour_mapping::factory::density_colour_map_factory;
pub use crate::core::colour_mapping::kinds::{DensityColourMapKind, UnknownColourMapError};
pub use crate::core::colour_mapping::map::DensityColourMap;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::matrix2x2::Matrix2x2;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::vector2d::Vector2D;
pub use crate::core::description::description::ChaosGameDescription;
pub use crate::core::description::errors::InvalidDescriptionError;
pub use crate::core::fractals::factory::{
    JULIA_MAX_COORDS, JULIA_MIN_COORDS, affine_custom, barnsley_fern, description_factory,
    dragon_curve, julia_custom, julia_set, koch_curve, sierpinski_triangle,
};
pub use crate::core::fractals::presets::{FractalPreset, UnknownPresetError};
pub use crate::core::game::chaos_game::{ChaosGame, START_POINT};
pub use crate::core::transforms::affine::{AffineTransform2D, DEFAULT_WEIGHT};
pub use crate::core::transforms::julia::{JuliaTransform, ParseSignError, Sign};
pub use crate::core::transforms::transform::{Transform, TransformKind};
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::storage::description_file;
pub use crate::storage::errors::{DescriptionFileError, ParseError};
